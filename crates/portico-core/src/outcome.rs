//! Three-way classification of a callback result.
//!
//! A business callback either succeeds, fails with a structured
//! [`HttpError`], or fails with something unexpected. The original
//! layer distinguished the latter two by sniffing value shapes at
//! runtime; [`Outcome`] makes the split explicit as a tagged type that
//! the pipeline matches on.

use crate::{CallbackError, CallbackResult, HttpError};

/// The classified result of one callback invocation.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The callback returned a value; respond with the operation's
    /// serializer and success status.
    Success(T),
    /// The callback failed with a structured error; respond with the
    /// error's own status code and JSON envelope.
    Fault(HttpError),
    /// The callback failed with an arbitrary error; respond with a
    /// generic 500, never exposing the cause.
    Unexpected(anyhow::Error),
}

impl<T> Outcome<T> {
    /// Classifies a callback result.
    #[must_use]
    pub fn classify(result: CallbackResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(CallbackError::Http(error)) => Self::Fault(error),
            Err(CallbackError::Unexpected(error)) => Self::Unexpected(error),
        }
    }

    /// Returns true for the success variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the structured error the client will see, if any.
    ///
    /// Unexpected failures map to [`HttpError::Server`].
    #[must_use]
    pub fn client_error(&self) -> Option<HttpError> {
        match self {
            Self::Success(_) => None,
            Self::Fault(error) => Some(*error),
            Self::Unexpected(_) => Some(HttpError::Server),
        }
    }
}
