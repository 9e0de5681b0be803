//! The route table.
//!
//! A [`RouteTable`] collects named, typed route registrations during
//! startup, rejecting duplicates immediately, and wires them onto the
//! underlying [`PathRouter`] at build time. Registration errors are
//! configuration errors: the caller is expected to propagate them out
//! of startup rather than continue serving.
//!
//! `build` consumes the table, so registering after build — and
//! building twice — is unrepresentable.

use http::Method;
use portico_core::{
    Callback, Guard, OperationKind, OperationSpec, SerializerRegistry,
};
use portico_router::PathRouter;
use serde::Serialize;
use thiserror::Error;

use crate::{bind, RequestBuilder, RouteHandler, TableConfig};

/// A violated registration invariant.
///
/// These are programming errors, fatal at startup: abort instead of
/// serving with a partially-registered table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A route with this name was already registered.
    #[error("duplicate route name: \"{0}\" was already registered")]
    DuplicateName(String),
    /// A route with this (url, kind) pair was already registered.
    #[error("duplicate route: \"{kind}\" at \"{url}\" was already registered")]
    DuplicateRoute {
        /// The conflicting URL.
        url: String,
        /// The conflicting operation kind.
        kind: OperationKind,
    },
}

/// One stored registration: unique name, URL, kind and handler.
struct RouteEntry {
    name: String,
    url: String,
    kind: OperationKind,
    handler: RouteHandler,
}

/// Named, typed route registrations over a serializer registry.
///
/// # Example
///
/// ```rust
/// use portico_core::{OperationSpec, RawRequest, SerializerRegistry};
/// use portico_dispatch::RouteTable;
///
/// #[derive(serde::Serialize)]
/// struct User { id: String }
///
/// # fn main() -> Result<(), portico_dispatch::RegistrationError> {
/// let mut table = RouteTable::new(SerializerRegistry::new());
/// table.read(
///     "/users/{userId}",
///     "getUser",
///     |raw: &RawRequest| raw.params().get("userId").unwrap_or_default().to_string(),
///     OperationSpec::new(
///         |id: &String| !id.is_empty(),
///         |id: String| async move { Ok(User { id }) },
///     ),
/// )?;
///
/// let router = table.build();
/// assert_eq!(router.route_count(), 1);
/// # Ok(())
/// # }
/// ```
pub struct RouteTable {
    serializers: SerializerRegistry,
    config: TableConfig,
    routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Creates a table with the default configuration.
    #[must_use]
    pub fn new(serializers: SerializerRegistry) -> Self {
        Self::with_config(serializers, TableConfig::default())
    }

    /// Creates a table with an explicit configuration.
    #[must_use]
    pub fn with_config(serializers: SerializerRegistry, config: TableConfig) -> Self {
        Self {
            serializers,
            config,
            routes: Vec::new(),
        }
    }

    /// Returns the number of registered routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Iterates over the registered route names, in registration order.
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    /// Registers a create operation (POST, 201 on success).
    pub fn create<B, G, C, Req, Res>(
        &mut self,
        url: impl Into<String>,
        name: impl Into<String>,
        build: B,
        spec: OperationSpec<G, C, Req, Res>,
    ) -> Result<(), RegistrationError>
    where
        B: RequestBuilder<Req>,
        G: Guard<Req>,
        C: Callback<Req, Res>,
        Req: Send + 'static,
        Res: Serialize + Send + 'static,
    {
        self.hook(OperationKind::Create, url.into(), name.into(), build, spec)
    }

    /// Registers a read operation (GET).
    pub fn read<B, G, C, Req, Res>(
        &mut self,
        url: impl Into<String>,
        name: impl Into<String>,
        build: B,
        spec: OperationSpec<G, C, Req, Res>,
    ) -> Result<(), RegistrationError>
    where
        B: RequestBuilder<Req>,
        G: Guard<Req>,
        C: Callback<Req, Res>,
        Req: Send + 'static,
        Res: Serialize + Send + 'static,
    {
        self.hook(OperationKind::Read, url.into(), name.into(), build, spec)
    }

    /// Registers an update operation (PUT).
    pub fn update<B, G, C, Req, Res>(
        &mut self,
        url: impl Into<String>,
        name: impl Into<String>,
        build: B,
        spec: OperationSpec<G, C, Req, Res>,
    ) -> Result<(), RegistrationError>
    where
        B: RequestBuilder<Req>,
        G: Guard<Req>,
        C: Callback<Req, Res>,
        Req: Send + 'static,
        Res: Serialize + Send + 'static,
    {
        self.hook(OperationKind::Update, url.into(), name.into(), build, spec)
    }

    /// Registers a delete operation (DELETE).
    pub fn delete<B, G, C, Req, Res>(
        &mut self,
        url: impl Into<String>,
        name: impl Into<String>,
        build: B,
        spec: OperationSpec<G, C, Req, Res>,
    ) -> Result<(), RegistrationError>
    where
        B: RequestBuilder<Req>,
        G: Guard<Req>,
        C: Callback<Req, Res>,
        Req: Send + 'static,
        Res: Serialize + Send + 'static,
    {
        self.hook(OperationKind::Delete, url.into(), name.into(), build, spec)
    }

    /// Registers an existence check (HEAD).
    pub fn exist<B, G, C, Req, Res>(
        &mut self,
        url: impl Into<String>,
        name: impl Into<String>,
        build: B,
        spec: OperationSpec<G, C, Req, Res>,
    ) -> Result<(), RegistrationError>
    where
        B: RequestBuilder<Req>,
        G: Guard<Req>,
        C: Callback<Req, Res>,
        Req: Send + 'static,
        Res: Serialize + Send + 'static,
    {
        self.hook(OperationKind::Exist, url.into(), name.into(), build, spec)
    }

    /// Shared registration routine behind the five kind methods.
    fn hook<B, G, C, Req, Res>(
        &mut self,
        kind: OperationKind,
        url: String,
        name: String,
        build: B,
        spec: OperationSpec<G, C, Req, Res>,
    ) -> Result<(), RegistrationError>
    where
        B: RequestBuilder<Req>,
        G: Guard<Req>,
        C: Callback<Req, Res>,
        Req: Send + 'static,
        Res: Serialize + Send + 'static,
    {
        if self.routes.iter().any(|r| r.name == name) {
            return Err(RegistrationError::DuplicateName(name));
        }
        if self.routes.iter().any(|r| r.url == url && r.kind == kind) {
            return Err(RegistrationError::DuplicateRoute { url, kind });
        }

        let operation = spec.bind(&self.serializers, kind, self.config.forward_on_error);
        let handler = bind(build, operation);

        tracing::info!(name = %name, url = %url, kind = %kind, "registered route");
        self.routes.push(RouteEntry {
            name,
            url,
            kind,
            handler,
        });
        Ok(())
    }

    /// Wires every registration onto the underlying router.
    ///
    /// Each handler is attached at its URL under the verb mapped from
    /// its kind. Consumes the table; the returned router is immutable
    /// from this layer's point of view and ready to mount.
    #[must_use]
    pub fn build(self) -> PathRouter<RouteHandler> {
        let mut router = PathRouter::new();
        for route in self.routes {
            let method: Method = route.kind.method();
            tracing::debug!(name = %route.name, url = %route.url, method = %method, "attaching route");
            router.attach(method, &route.url, route.handler);
        }
        tracing::info!(routes = router.route_count(), "route table built");
        router
    }
}
