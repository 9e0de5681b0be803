//! Underlying path router for the Portico dispatch layer.
//!
//! This crate is the "framework-native" collaborator that the route
//! table wires handlers into: a plain (method, path template) → value
//! store with OpenAPI-style `{param}` templates. It knows nothing about
//! guards, serializers or operations — [`PathRouter`] is generic over
//! the stored value, so higher layers decide what a handler is.
//!
//! # Example
//!
//! ```rust
//! use portico_router::PathRouter;
//! use http::Method;
//!
//! let mut router = PathRouter::new();
//! router.attach(Method::GET, "/users/{userId}", "getUser");
//!
//! let m = router.match_route(&Method::GET, "/users/42").unwrap();
//! assert_eq!(m.value(), &"getUser");
//! assert_eq!(m.params().get("userId"), Some("42"));
//! ```

mod params;
mod router;

pub use params::Params;
pub use router::{PathRouter, RouteMatch};
