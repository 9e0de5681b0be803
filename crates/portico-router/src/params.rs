//! Path parameter storage.
//!
//! Parameters extracted from a matched path template are stored as
//! (name, value) pairs in a small vector, so the common case of one or
//! two parameters never touches the heap.

use smallvec::SmallVec;

/// Number of parameters stored inline before spilling to the heap.
const INLINE_PARAMS: usize = 4;

/// Path parameters extracted from a route match.
///
/// # Example
///
/// ```rust
/// use portico_router::Params;
///
/// let mut params = Params::new();
/// params.push("id", "42");
///
/// assert_eq!(params.get("id"), Some("42"));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value of a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if no parameters were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterates over the (name, value) pairs in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert_eq!(params.get("anything"), None);
    }

    #[test]
    fn test_params_push_and_get() {
        let mut params = Params::new();
        params.push("userId", "7");
        params.push("postId", "99");

        assert_eq!(params.get("userId"), Some("7"));
        assert_eq!(params.get("postId"), Some("99"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_params_iter_preserves_order() {
        let mut params = Params::new();
        params.push("a", "1");
        params.push("b", "2");

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_params_from_iterator() {
        let params: Params = vec![("id".to_string(), "3".to_string())]
            .into_iter()
            .collect();
        assert_eq!(params.get("id"), Some("3"));
    }

    #[test]
    fn test_params_spill_past_inline_capacity() {
        let mut params = Params::new();
        for i in 0..8 {
            params.push(format!("k{i}"), format!("v{i}"));
        }
        assert_eq!(params.len(), 8);
        assert_eq!(params.get("k6"), Some("v6"));
    }
}
