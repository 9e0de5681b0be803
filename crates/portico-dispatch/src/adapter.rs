//! Request adapter.
//!
//! The adapter binds a request builder to a bound operation, yielding
//! the framework-native [`RouteHandler`] the underlying router stores.
//! The builder only collects data from the raw request (headers, path
//! parameters, body, query); validation stays entirely inside the
//! operation's guard.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use portico_core::{Callback, Disposition, Guard, Operation, RawRequest};
use serde::Serialize;

/// A framework-native handler: raw request in, disposition out.
pub type RouteHandler = Arc<dyn Fn(RawRequest) -> BoxFuture<'static, Disposition> + Send + Sync>;

/// Extracts the typed candidate value from a raw request.
///
/// Builders are deliberately infallible and perform no validation;
/// a builder that cannot find what it needs produces a candidate the
/// guard will reject. Implemented for plain closures:
///
/// ```rust
/// use portico_core::RawRequest;
///
/// struct ReadUser { id: String }
///
/// let build = |raw: &RawRequest| ReadUser {
///     id: raw.params().get("userId").unwrap_or_default().to_string(),
/// };
/// # let _ = build;
/// ```
pub trait RequestBuilder<Req>: Send + Sync + 'static {
    /// Collects the candidate value from the raw request.
    fn build(&self, raw: &RawRequest) -> Req;
}

impl<F, Req> RequestBuilder<Req> for F
where
    F: Fn(&RawRequest) -> Req + Send + Sync + 'static,
{
    fn build(&self, raw: &RawRequest) -> Req {
        self(raw)
    }
}

/// Binds a request builder to an operation, producing a route handler.
///
/// Each invocation of the handler extracts the candidate, then runs
/// the operation pipeline to completion.
#[must_use]
pub fn bind<B, G, C, Req, Res>(build: B, operation: Operation<G, C, Req, Res>) -> RouteHandler
where
    B: RequestBuilder<Req>,
    G: Guard<Req>,
    C: Callback<Req, Res>,
    Req: Send + 'static,
    Res: Serialize + Send + 'static,
{
    let operation = Arc::new(operation);
    Arc::new(move |raw: RawRequest| {
        let candidate = build.build(&raw);
        let operation = Arc::clone(&operation);
        let future: BoxFuture<'static, Disposition> =
            Box::pin(async move { operation.invoke(candidate).await });
        future
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use portico_core::{OperationKind, OperationSpec, SerializerRegistry};
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    struct Echo {
        id: String,
    }

    #[derive(Debug)]
    struct ReadEcho {
        id: String,
    }

    fn handler() -> RouteHandler {
        let spec = OperationSpec::new(
            |candidate: &ReadEcho| !candidate.id.is_empty(),
            |candidate: ReadEcho| async move { Ok(Echo { id: candidate.id }) },
        );
        let operation = spec.bind(&SerializerRegistry::new(), OperationKind::Read, false);
        bind(
            |raw: &RawRequest| ReadEcho {
                id: raw.params().get("id").unwrap_or_default().to_string(),
            },
            operation,
        )
    }

    #[tokio::test]
    async fn test_bound_handler_extracts_from_params() {
        let handler = handler();
        let raw = RawRequest::builder().uri("/echo/9").param("id", "9").build();

        let response = handler(raw).await.into_response().unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["id"], "9");
    }

    #[tokio::test]
    async fn test_missing_param_fails_guard_not_builder() {
        let handler = handler();
        let raw = RawRequest::builder().uri("/echo").build();

        let response = handler(raw).await.into_response().unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handler_is_reusable_across_requests() {
        let handler = handler();
        for id in ["1", "2", "3"] {
            let raw = RawRequest::builder().param("id", id).build();
            let response = handler(raw).await.into_response().unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
