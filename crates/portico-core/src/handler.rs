//! Guard and callback traits.
//!
//! A [`Guard`] decides whether a typed candidate value is safe to hand
//! to business logic; a [`Callback`] is the business logic itself.
//! Both are implemented for plain closures, so most call sites never
//! name these traits.

use std::future::Future;

use serde::Serialize;

use crate::CallbackResult;

/// A predicate validating a typed candidate value before use.
///
/// Guards run before the business callback and perform the only
/// validation in the pipeline; a rejection short-circuits into a
/// 400 Format Error response.
///
/// # Example
///
/// ```rust
/// use portico_core::Guard;
///
/// struct ReadUser { id: String }
///
/// let guard = |candidate: &ReadUser| !candidate.id.is_empty();
/// assert!(guard.check(&ReadUser { id: "7".into() }));
/// assert!(!guard.check(&ReadUser { id: String::new() }));
/// ```
pub trait Guard<Req>: Send + Sync + 'static {
    /// Returns true if the candidate conforms to the expected shape.
    fn check(&self, candidate: &Req) -> bool;
}

impl<F, Req> Guard<Req> for F
where
    F: Fn(&Req) -> bool + Send + Sync + 'static,
{
    fn check(&self, candidate: &Req) -> bool {
        self(candidate)
    }
}

/// A business callback from a validated request to a typed response.
///
/// Callbacks are async and fail through [`crate::CallbackError`]:
/// structured errors for expected failures, anything else for
/// unexpected ones. The pipeline invokes a callback at most once per
/// request, only after its guard accepted the candidate.
///
/// Implemented for any `Fn(Req) -> impl Future<Output =
/// CallbackResult<Res>>`, so async closures and free async functions
/// work directly:
///
/// ```rust
/// use portico_core::{CallbackResult, HttpError};
///
/// async fn find_name(id: u64) -> CallbackResult<String> {
///     if id == 0 {
///         return Err(HttpError::NotFound.into());
///     }
///     Ok(format!("user-{id}"))
/// }
/// ```
pub trait Callback<Req, Res>: Send + Sync + 'static
where
    Req: Send + 'static,
    Res: Serialize + Send + 'static,
{
    /// Executes the business logic for one validated request.
    fn call(&self, request: Req) -> impl Future<Output = CallbackResult<Res>> + Send;
}

impl<F, Fut, Req, Res> Callback<Req, Res> for F
where
    F: Fn(Req) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = CallbackResult<Res>> + Send,
    Req: Send + 'static,
    Res: Serialize + Send + 'static,
{
    fn call(&self, request: Req) -> impl Future<Output = CallbackResult<Res>> + Send {
        self(request)
    }
}
