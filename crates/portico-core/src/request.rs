//! Raw request context.
//!
//! [`RawRequest`] is the untyped, framework-native view of one incoming
//! request: method, URI, headers, body bytes and the path parameters
//! the underlying router extracted. Request builders read from it to
//! produce the typed candidate value an operation validates.

use bytes::Bytes;
use http::{HeaderMap, Method, Uri};
use portico_router::Params;

/// The raw, untyped view of an incoming request.
///
/// # Example
///
/// ```rust
/// use portico_core::RawRequest;
/// use http::Method;
///
/// let raw = RawRequest::builder()
///     .method(Method::GET)
///     .uri("/users/3")
///     .param("userId", "3")
///     .build();
///
/// assert_eq!(raw.path(), "/users/3");
/// assert_eq!(raw.params().get("userId"), Some("3"));
/// ```
#[derive(Debug, Clone)]
pub struct RawRequest {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
    params: Params,
}

impl RawRequest {
    /// Creates a raw request from its parts.
    #[must_use]
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, body: Bytes, params: Params) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
            params,
        }
    }

    /// Returns a builder, mainly useful in tests.
    #[must_use]
    pub fn builder() -> RawRequestBuilder {
        RawRequestBuilder::default()
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the path portion of the URI.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the query string, if present.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns one header value as a string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the request body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the path parameters extracted by the router.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }
}

/// Builder for [`RawRequest`].
#[derive(Debug, Default)]
pub struct RawRequestBuilder {
    method: Option<Method>,
    uri: Option<Uri>,
    headers: HeaderMap,
    body: Bytes,
    params: Params,
}

impl RawRequestBuilder {
    /// Sets the HTTP method. Defaults to GET.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the URI. Defaults to `/`.
    #[must_use]
    pub fn uri(mut self, uri: impl TryInto<Uri>) -> Self {
        self.uri = uri.try_into().ok();
        self
    }

    /// Adds one header; silently ignored when the value is invalid.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(value) = value.parse() {
            self.headers.insert(name, value);
        }
        self
    }

    /// Sets the body bytes.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Adds one path parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(name, value);
        self
    }

    /// Sets all path parameters at once.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Builds the raw request.
    #[must_use]
    pub fn build(self) -> RawRequest {
        RawRequest {
            method: self.method.unwrap_or(Method::GET),
            uri: self.uri.unwrap_or_else(|| Uri::from_static("/")),
            headers: self.headers,
            body: self.body,
            params: self.params,
        }
    }
}
