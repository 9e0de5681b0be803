//! Operation kinds and their fixed HTTP mapping.

use http::{Method, StatusCode};
use serde::{Deserialize, Serialize};

/// The five CRUD-style operation semantics.
///
/// Each kind is bound to exactly one HTTP verb and one success status
/// policy. The mapping is a constant bijection, never configurable:
///
/// | Kind | Verb | Success |
/// |------|------|---------|
/// | `Create` | POST | 201 |
/// | `Read` | GET | 200 |
/// | `Update` | PUT | 200 |
/// | `Delete` | DELETE | 200 |
/// | `Exist` | HEAD | 200 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Create a resource (POST, 201 on success).
    Create,
    /// Read a resource (GET).
    Read,
    /// Update a resource (PUT).
    Update,
    /// Delete a resource (DELETE).
    Delete,
    /// Check resource existence (HEAD).
    Exist,
}

impl OperationKind {
    /// All operation kinds.
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Read,
        Self::Update,
        Self::Delete,
        Self::Exist,
    ];

    /// Returns the HTTP verb this kind is bound to.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::Create => Method::POST,
            Self::Read => Method::GET,
            Self::Update => Method::PUT,
            Self::Delete => Method::DELETE,
            Self::Exist => Method::HEAD,
        }
    }

    /// Returns the status code used for a successful outcome.
    #[must_use]
    pub const fn success_status(&self) -> StatusCode {
        match self {
            Self::Create => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }

    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Exist => "exist",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
