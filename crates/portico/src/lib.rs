//! # Portico
//!
//! **Typed request-handling layer in front of an HTTP server framework**
//!
//! Portico turns raw, untyped HTTP requests into guarded, serialized,
//! status-coded responses:
//!
//! - a request builder extracts a typed candidate from the raw request
//! - a guard validates the candidate before any business logic runs
//! - the business callback produces a typed response or a structured
//!   error
//! - a serializer chosen by content type renders the response
//!
//! Routes are registered by operation kind (create/read/update/delete/
//! exist), each bound to one HTTP verb and one success status, with
//! duplicate names and duplicate (url, kind) pairs rejected at
//! registration time.
//!
//! ## Quick Start
//!
//! ```rust
//! use portico::prelude::*;
//!
//! #[derive(serde::Serialize)]
//! struct User { id: String, name: String }
//!
//! # fn main() -> Result<(), RegistrationError> {
//! let mut table = RouteTable::new(SerializerRegistry::new());
//! table.read(
//!     "/users/{userId}",
//!     "getUser",
//!     |raw: &RawRequest| raw.params().get("userId").unwrap_or_default().to_string(),
//!     OperationSpec::new(
//!         |id: &String| !id.is_empty(),
//!         |id: String| async move { Ok(User { id, name: "x".into() }) },
//!     ),
//! )?;
//!
//! // The populated router is ready to mount on the serving layer.
//! let router = table.build();
//! assert_eq!(router.route_count(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Dispatch flow
//!
//! ```text
//! raw request → builder → guard → callback → classify → serialize → response
//!                           │ reject            │ error + forwarding
//!                           ▼                   ▼
//!                     400 Format Error    forward to next handler
//! ```

#![doc(html_root_url = "https://docs.rs/portico/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use portico_core as core;

// Re-export dispatch types
pub use portico_dispatch as dispatch;

// Re-export the underlying router
pub use portico_router as router;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use portico::prelude::*;
/// ```
pub mod prelude {
    pub use portico_core::{
        Callback, CallbackError, CallbackResult, Disposition, Guard, HttpError, MimeType,
        Operation, OperationKind, OperationSpec, Outcome, RawRequest, SerializerEntry,
        SerializerRegistry,
    };

    pub use portico_dispatch::{
        bind, RegistrationError, RequestBuilder, RouteHandler, RouteTable, TableConfig,
    };

    pub use portico_router::{Params, PathRouter, RouteMatch};
}
