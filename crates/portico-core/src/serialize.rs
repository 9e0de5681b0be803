//! MIME types and the serializer registry.
//!
//! A serializer turns an already-structured response value into its
//! wire string for one MIME type. The registry is an ordered sequence
//! of entries; selection is exact-MIME, first match wins, and happens
//! once per operation at bind time rather than per request. When no
//! entry matches, the generic JSON fallback is used (logged, not
//! fatal).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The content types an operation may be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MimeType {
    /// `application/json`
    #[serde(rename = "application/json")]
    Json,
    /// `application/javascript`
    #[serde(rename = "application/javascript")]
    Javascript,
    /// `text/plain`
    #[serde(rename = "text/plain")]
    Text,
    /// `text/html`
    #[serde(rename = "text/html")]
    Html,
    /// `text/css`
    #[serde(rename = "text/css")]
    Css,
    /// `text/csv`
    #[serde(rename = "text/csv")]
    Csv,
}

impl MimeType {
    /// Returns the MIME string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Javascript => "application/javascript",
            Self::Text => "text/plain",
            Self::Html => "text/html",
            Self::Css => "text/css",
            Self::Csv => "text/csv",
        }
    }
}

impl std::fmt::Display for MimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A serialization function from a structured value to a wire string.
pub type Serializer = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// A serializer registered for one MIME type.
#[derive(Clone)]
pub struct SerializerEntry {
    mime: MimeType,
    serializer: Serializer,
}

impl SerializerEntry {
    /// Creates an entry for a MIME type.
    pub fn new(mime: MimeType, serializer: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Self {
            mime,
            serializer: Arc::new(serializer),
        }
    }

    /// Returns the MIME type this entry serves.
    #[must_use]
    pub fn mime(&self) -> MimeType {
        self.mime
    }
}

impl std::fmt::Debug for SerializerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializerEntry")
            .field("mime", &self.mime)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of serializers, selected by exact MIME match.
///
/// # Example
///
/// ```rust
/// use portico_core::{MimeType, SerializerRegistry};
///
/// let registry = SerializerRegistry::new()
///     .with(MimeType::Text, |value| value.to_string())
///     .with(MimeType::Csv, |value| format!("csv:{value}"));
///
/// let serializer = registry.select(MimeType::Csv);
/// let rendered = serializer(&serde_json::json!(1));
/// assert_eq!(rendered, "csv:1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SerializerRegistry {
    entries: Vec<SerializerEntry>,
}

impl SerializerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a serializer for a MIME type, builder style.
    #[must_use]
    pub fn with(
        mut self,
        mime: MimeType,
        serializer: impl Fn(&Value) -> String + Send + Sync + 'static,
    ) -> Self {
        self.entries.push(SerializerEntry::new(mime, serializer));
        self
    }

    /// Adds an entry to the end of the sequence.
    pub fn register(&mut self, entry: SerializerEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no serializers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selects the serializer for a MIME type.
    ///
    /// First entry with an exact MIME match wins. Without a match the
    /// generic JSON fallback is returned; misconfiguration is logged
    /// but deliberately not fatal.
    #[must_use]
    pub fn select(&self, mime: MimeType) -> Serializer {
        for entry in &self.entries {
            if entry.mime == mime {
                return Arc::clone(&entry.serializer);
            }
        }
        tracing::warn!(%mime, "no serializer registered, falling back to generic JSON");
        Self::generic()
    }

    /// The generic fallback serializer: compact JSON.
    #[must_use]
    pub fn generic() -> Serializer {
        Arc::new(Value::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mime_strings() {
        assert_eq!(MimeType::Json.as_str(), "application/json");
        assert_eq!(MimeType::Javascript.as_str(), "application/javascript");
        assert_eq!(MimeType::Text.as_str(), "text/plain");
        assert_eq!(MimeType::Html.as_str(), "text/html");
        assert_eq!(MimeType::Css.as_str(), "text/css");
        assert_eq!(MimeType::Csv.as_str(), "text/csv");
    }

    #[test]
    fn test_mime_serde_round_trip() {
        let json = serde_json::to_string(&MimeType::Text).unwrap();
        assert_eq!(json, "\"text/plain\"");
        let mime: MimeType = serde_json::from_str("\"application/json\"").unwrap();
        assert_eq!(mime, MimeType::Json);
    }

    #[test]
    fn test_select_exact_match() {
        let registry = SerializerRegistry::new()
            .with(MimeType::Json, |v| v.to_string())
            .with(MimeType::Text, |v| format!("text:{v}"));

        let serializer = registry.select(MimeType::Text);
        assert_eq!(serializer(&json!("a")), "text:\"a\"");
    }

    #[test]
    fn test_select_first_match_wins() {
        let registry = SerializerRegistry::new()
            .with(MimeType::Text, |_| "first".to_string())
            .with(MimeType::Text, |_| "second".to_string());

        let serializer = registry.select(MimeType::Text);
        assert_eq!(serializer(&json!(null)), "first");
    }

    #[test]
    fn test_select_falls_back_to_generic() {
        let registry = SerializerRegistry::new().with(MimeType::Json, |v| v.to_string());

        let serializer = registry.select(MimeType::Html);
        assert_eq!(serializer(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn test_generic_is_compact_json() {
        let serializer = SerializerRegistry::generic();
        assert_eq!(
            serializer(&json!({"id": "1", "name": "x"})),
            "{\"id\":\"1\",\"name\":\"x\"}"
        );
    }

    #[test]
    fn test_registry_len() {
        let mut registry = SerializerRegistry::new();
        assert!(registry.is_empty());

        registry.register(SerializerEntry::new(MimeType::Css, |v| v.to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.select(MimeType::Css)(&json!(2)), "2");
    }
}
