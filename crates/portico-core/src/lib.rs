//! Core types and dispatch pipeline for Portico.
//!
//! Portico is a typed request-handling layer sitting in front of an
//! HTTP server framework. This crate holds everything the pipeline
//! needs:
//!
//! - [`HttpError`] / [`CallbackError`] — structured errors and the
//!   callback failure union
//! - [`Outcome`] — three-way classification of a callback result
//! - [`OperationKind`] — the five CRUD-style semantics with their
//!   fixed verb and success-status mapping
//! - [`MimeType`] / [`SerializerRegistry`] — content types and
//!   exact-match serializer selection
//! - [`RawRequest`] — the untyped framework-native request view
//! - [`Guard`] / [`Callback`] — the validation and business-logic
//!   seams, implemented for plain closures
//! - [`OperationSpec`] / [`Operation`] — the operation factory and the
//!   bound per-route pipeline producing a [`Disposition`]
//!
//! Route registration and build-time wiring live in
//! `portico-dispatch`; the path-matching collaborator lives in
//! `portico-router`.

mod error;
mod handler;
mod kind;
mod outcome;
mod pipeline;
mod request;
mod response;
mod serialize;

pub use error::{CallbackError, CallbackResult, HttpError};
pub use handler::{Callback, Guard};
pub use kind::OperationKind;
pub use outcome::Outcome;
pub use pipeline::{Disposition, Operation, OperationSpec};
pub use request::{RawRequest, RawRequestBuilder};
pub use response::{respond, respond_error};
pub use serialize::{MimeType, Serializer, SerializerEntry, SerializerRegistry};
