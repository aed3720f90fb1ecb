//! Domain error taxonomy shared across crates.
//!
//! HTTP-specific concerns (status codes, response bodies) live in the API
//! crate; this type only names *what* went wrong.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested entity does not exist. `key` is the external lookup
    /// key (e.g. a registration id), not an internal row id.
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    /// Caller input is missing, empty, or outside the allowed domain.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation collides with existing state (duplicate identity).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller presented no credential, or a credential that does not
    /// verify. The message must never reveal which.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but its role is not in the allowed set.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unexpected failure that callers must only ever see sanitized.
    #[error("Internal error: {0}")]
    Internal(String),
}
