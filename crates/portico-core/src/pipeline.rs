//! The operation pipeline.
//!
//! [`OperationSpec`] is what a caller describes: guard, callback and
//! target MIME type. Binding a spec against a serializer registry,
//! an operation kind and the forward flag yields an [`Operation`],
//! the per-route pipeline invoked once per request:
//!
//! 1. guard check — rejection responds 400 Format Error immediately,
//!    bypassing the configured serializer
//! 2. execute the callback, at most once, awaiting completion
//! 3. classify the outcome ([`Outcome`])
//! 4. respond (or forward the error to the continuation collaborator)
//!
//! Each invocation produces exactly one [`Disposition`]: one response
//! written or one error forwarded, never both.

use std::marker::PhantomData;

use bytes::Bytes;
use http::Response;
use serde::Serialize;

use crate::response::{respond, respond_error};
use crate::{
    Callback, CallbackError, Guard, HttpError, MimeType, OperationKind, Outcome, Serializer,
    SerializerRegistry,
};

/// The single side effect of one pipeline invocation.
#[derive(Debug)]
pub enum Disposition {
    /// Write this response to the client.
    Respond(Response<Bytes>),
    /// Hand the error, unmodified, to the next handler in the chain;
    /// nothing is written to the client here.
    Forward(CallbackError),
}

impl Disposition {
    /// Returns the response, if one is to be written.
    #[must_use]
    pub fn into_response(self) -> Option<Response<Bytes>> {
        match self {
            Self::Respond(response) => Some(response),
            Self::Forward(_) => None,
        }
    }

    /// Returns the forwarded error, if any.
    #[must_use]
    pub fn into_forwarded(self) -> Option<CallbackError> {
        match self {
            Self::Respond(_) => None,
            Self::Forward(error) => Some(error),
        }
    }
}

/// An operation as described by the caller: guard, callback, MIME.
///
/// # Example
///
/// ```rust
/// use portico_core::{MimeType, OperationSpec, CallbackResult};
///
/// #[derive(serde::Serialize)]
/// struct Greeting { text: String }
///
/// let spec = OperationSpec::new(
///     |name: &String| !name.is_empty(),
///     |name: String| async move {
///         CallbackResult::Ok(Greeting { text: format!("hi {name}") })
///     },
/// )
/// .with_mime(MimeType::Text);
/// ```
pub struct OperationSpec<G, C, Req, Res> {
    guard: G,
    callback: C,
    mime: MimeType,
    _phantom: PhantomData<fn(Req) -> Res>,
}

impl<G, C, Req, Res> OperationSpec<G, C, Req, Res>
where
    G: Guard<Req>,
    C: Callback<Req, Res>,
    Req: Send + 'static,
    Res: Serialize + Send + 'static,
{
    /// Creates a spec with the default MIME type, `application/json`.
    #[must_use]
    pub fn new(guard: G, callback: C) -> Self {
        Self {
            guard,
            callback,
            mime: MimeType::Json,
            _phantom: PhantomData,
        }
    }

    /// Sets the MIME type used for successful responses.
    #[must_use]
    pub fn with_mime(mut self, mime: MimeType) -> Self {
        self.mime = mime;
        self
    }

    /// Returns the configured MIME type.
    #[must_use]
    pub fn mime(&self) -> MimeType {
        self.mime
    }

    /// Binds the spec into an invocable operation.
    ///
    /// Serializer selection happens here, once per route, not per
    /// request.
    #[must_use]
    pub fn bind(
        self,
        serializers: &SerializerRegistry,
        kind: OperationKind,
        forward_on_error: bool,
    ) -> Operation<G, C, Req, Res> {
        Operation {
            guard: self.guard,
            callback: self.callback,
            serializer: serializers.select(self.mime),
            mime: self.mime,
            kind,
            forward_on_error,
            _phantom: PhantomData,
        }
    }
}

/// A bound, per-route dispatch pipeline.
///
/// Holds no state across invocations; safe to share behind an `Arc`
/// between concurrent requests.
pub struct Operation<G, C, Req, Res> {
    guard: G,
    callback: C,
    serializer: Serializer,
    mime: MimeType,
    kind: OperationKind,
    forward_on_error: bool,
    _phantom: PhantomData<fn(Req) -> Res>,
}

impl<G, C, Req, Res> Operation<G, C, Req, Res>
where
    G: Guard<Req>,
    C: Callback<Req, Res>,
    Req: Send + 'static,
    Res: Serialize + Send + 'static,
{
    /// Returns the operation kind this pipeline was bound for.
    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Runs the pipeline for one extracted candidate value.
    pub async fn invoke(&self, candidate: Req) -> Disposition {
        if !self.guard.check(&candidate) {
            tracing::debug!(kind = %self.kind, "guard rejected request candidate");
            return Disposition::Respond(respond_error(HttpError::Format));
        }

        let result = self.callback.call(candidate).await;
        match Outcome::classify(result) {
            Outcome::Success(value) => self.success(&value),
            Outcome::Fault(error) if self.forward_on_error => {
                Disposition::Forward(CallbackError::Http(error))
            }
            Outcome::Unexpected(error) if self.forward_on_error => {
                Disposition::Forward(CallbackError::Unexpected(error))
            }
            Outcome::Fault(error) => Disposition::Respond(respond_error(error)),
            Outcome::Unexpected(error) => {
                tracing::warn!(kind = %self.kind, error = %error, "callback failed unexpectedly");
                Disposition::Respond(respond_error(HttpError::Server))
            }
        }
    }

    /// Serializes a successful value with the bound serializer.
    fn success(&self, value: &Res) -> Disposition {
        match serde_json::to_value(value) {
            Ok(structured) => {
                let body = (self.serializer)(&structured);
                Disposition::Respond(respond(&body, self.mime, self.kind.success_status()))
            }
            Err(error) => {
                tracing::warn!(kind = %self.kind, error = %error, "response value not serializable");
                Disposition::Respond(respond_error(HttpError::Server))
            }
        }
    }
}
