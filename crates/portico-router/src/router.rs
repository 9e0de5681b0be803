//! Method + path-template routing.
//!
//! [`PathRouter`] maps incoming (method, path) pairs to attached values.
//! Path templates use OpenAPI-style `{param}` segments; a match must
//! agree on method and segment count, and first match wins in
//! attachment order. The stored value type is generic so this crate
//! stays free of any handler or dispatch vocabulary.

use http::Method;

use crate::Params;

/// A segment of a parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// A literal segment, e.g. `users`.
    Literal(String),
    /// A parameter segment, e.g. `{userId}`.
    Param(String),
}

fn parse_segments(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with('{') && s.ends_with('}') {
                Segment::Param(s[1..s.len() - 1].to_string())
            } else {
                Segment::Literal(s.to_string())
            }
        })
        .collect()
}

/// One attached route: method, parsed template and the stored value.
#[derive(Debug, Clone)]
struct Route<T> {
    method: Method,
    segments: Vec<Segment>,
    value: T,
}

impl<T> Route<T> {
    /// Matches this route against a concrete path, extracting params.
    fn match_path(&self, path: &str) -> Option<Params> {
        let actual: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if actual.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(actual.iter()) {
            match segment {
                Segment::Literal(expected) => {
                    if expected != part {
                        return None;
                    }
                }
                Segment::Param(name) => params.push(name.clone(), (*part).to_string()),
            }
        }
        Some(params)
    }
}

/// A matched route: the attached value and extracted path parameters.
#[derive(Debug)]
pub struct RouteMatch<'a, T> {
    value: &'a T,
    params: Params,
}

impl<'a, T> RouteMatch<'a, T> {
    /// Returns the value attached at the matched route.
    #[must_use]
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Returns the extracted path parameters.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Consumes the match, returning value and parameters.
    #[must_use]
    pub fn into_parts(self) -> (&'a T, Params) {
        (self.value, self.params)
    }
}

/// Method + path-template router.
///
/// # Example
///
/// ```rust
/// use portico_router::PathRouter;
/// use http::Method;
///
/// let mut router = PathRouter::new();
/// router.attach(Method::GET, "/users", "listUsers");
/// router.attach(Method::GET, "/users/{userId}", "getUser");
///
/// let m = router.match_route(&Method::GET, "/users/alice").unwrap();
/// assert_eq!(m.value(), &"getUser");
/// assert_eq!(m.params().get("userId"), Some("alice"));
///
/// assert!(router.match_route(&Method::POST, "/users").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathRouter<T> {
    routes: Vec<Route<T>>,
}

impl<T> PathRouter<T> {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Attaches a value at a method + path template.
    ///
    /// Repeated attachment at the same method and template is accepted;
    /// matching always resolves to the earliest attachment.
    pub fn attach(&mut self, method: Method, pattern: impl AsRef<str>, value: T) {
        self.routes.push(Route {
            method,
            segments: parse_segments(pattern.as_ref()),
            value,
        });
    }

    /// Returns the number of attached routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Matches an incoming request, first match wins.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch<'_, T>> {
        for route in &self.routes {
            if route.method == *method {
                if let Some(params) = route.match_path(path) {
                    return Some(RouteMatch {
                        value: &route.value,
                        params,
                    });
                }
            }
        }
        None
    }

    /// Returns the methods attached for a path, for 405-style handling.
    #[must_use]
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut methods = Vec::new();
        for route in &self.routes {
            if route.match_path(path).is_some() && !methods.contains(&route.method) {
                methods.push(route.method.clone());
            }
        }
        methods
    }
}
