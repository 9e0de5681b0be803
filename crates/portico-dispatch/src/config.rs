//! Route table configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::RouteTable`].
///
/// Deserializes from the usual layered config sources; unknown fields
/// are rejected so typos fail at load time.
///
/// ```rust
/// use portico_dispatch::TableConfig;
///
/// let config: TableConfig =
///     serde_json::from_str(r#"{"forward_on_error": true}"#).unwrap();
/// assert!(config.forward_on_error);
///
/// assert!(!TableConfig::default().forward_on_error);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TableConfig {
    /// When true, callback failures are forwarded to the next handler
    /// in the chain instead of being written as error responses.
    pub forward_on_error: bool,
}

impl TableConfig {
    /// Creates the default configuration (no forwarding).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables error forwarding, builder style.
    #[must_use]
    pub fn with_forward_on_error(mut self, forward: bool) -> Self {
        self.forward_on_error = forward;
        self
    }
}
