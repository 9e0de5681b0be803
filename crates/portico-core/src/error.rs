//! Structured HTTP errors and the callback error union.
//!
//! [`HttpError`] is the closed set of structured errors a business
//! callback may signal on purpose. Each variant carries a fixed HTTP
//! status code and a short label, and serializes to the wire envelope
//! `{"code": <int>, "status": "<label>"}`.
//!
//! The original dynamic-typed layer detected structured errors by
//! shape (`"code" in x && "status" in x`). Here the distinction is a
//! tagged union instead: [`CallbackError`] separates structured errors
//! from arbitrary failures at the type level, so classification never
//! sniffs value shapes.

use http::StatusCode;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Result type for business callbacks.
pub type CallbackResult<T> = Result<T, CallbackError>;

/// A structured HTTP error: a fixed status code plus a short label.
///
/// These are values, not exceptions. A callback returns one through
/// [`CallbackError::Http`] when the failure is an expected part of the
/// operation's contract (missing resource, denied access, ...).
///
/// # Example
///
/// ```
/// use portico_core::HttpError;
///
/// let error = HttpError::NotFound;
/// assert_eq!(error.code(), 404);
/// assert_eq!(error.label(), "Not Found Error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HttpError {
    /// The request candidate failed guard validation (400).
    #[error("Format Error")]
    Format,
    /// Missing or invalid credentials (401).
    #[error("Unauthorized Error")]
    Unauthorized,
    /// Permission denied (403).
    #[error("Forbidden Error")]
    Forbidden,
    /// Resource not found (404).
    #[error("Not Found Error")]
    NotFound,
    /// Generic server failure (500).
    #[error("Server Error")]
    Server,
}

impl HttpError {
    /// All structured errors, in status-code order.
    pub const ALL: [Self; 5] = [
        Self::Format,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::Server,
    ];

    /// Returns the numeric HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Format => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Server => 500,
        }
    }

    /// Returns the short status label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Format => "Format Error",
            Self::Unauthorized => "Unauthorized Error",
            Self::Forbidden => "Forbidden Error",
            Self::NotFound => "Not Found Error",
            Self::Server => "Server Error",
        }
    }

    /// Returns the status code as an [`http::StatusCode`].
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Format => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the wire envelope as a JSON value.
    #[must_use]
    pub fn envelope(&self) -> serde_json::Value {
        serde_json::json!({ "code": self.code(), "status": self.label() })
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HttpError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("status", self.label())?;
        state.end()
    }
}

/// The failure side of a business callback.
///
/// Callbacks fail either with a structured [`HttpError`] (expected,
/// encoded for the client with its own status code) or with an
/// arbitrary error (unexpected, degraded to a generic 500 so internals
/// never leak). Both convert via `?`:
///
/// ```
/// use portico_core::{CallbackResult, HttpError};
///
/// fn lookup(id: &str) -> CallbackResult<String> {
///     if id.is_empty() {
///         return Err(HttpError::NotFound.into());
///     }
///     Ok(id.to_uppercase())
/// }
/// ```
#[derive(Debug, Error)]
pub enum CallbackError {
    /// An expected, structured error carrying its own status code.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// Any other failure; reported to clients as a generic 500.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl CallbackError {
    /// Returns the structured error, if this is one.
    #[must_use]
    pub fn as_http(&self) -> Option<HttpError> {
        match self {
            Self::Http(error) => Some(*error),
            Self::Unexpected(_) => None,
        }
    }
}
