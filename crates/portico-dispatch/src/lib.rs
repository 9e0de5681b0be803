//! Route registration and build-time wiring for Portico.
//!
//! This crate connects the pieces from `portico-core` to the
//! underlying router from `portico-router`:
//!
//! - [`bind`] / [`RequestBuilder`] — the request adapter, turning a
//!   builder plus a bound operation into a framework-native
//!   [`RouteHandler`]
//! - [`RouteTable`] — named, typed registrations with duplicate
//!   rejection and kind→verb wiring at build time
//! - [`TableConfig`] — typed configuration for the table
//!
//! Registration happens fully before building; the built
//! [`portico_router::PathRouter`] is immutable and shared read-only
//! between concurrent request tasks.

mod adapter;
mod config;
mod table;

pub use adapter::{bind, RequestBuilder, RouteHandler};
pub use config::TableConfig;
pub use table::{RegistrationError, RouteTable};
