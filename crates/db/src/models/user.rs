//! User entity model and DTOs.

use archon_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    /// External lookup key. Immutable after creation.
    pub registration_id: String,
    pub password_hash: String,
    /// One of the names in `archon_core::roles::ALL_ROLES`.
    pub role: String,
    pub created_at: Timestamp,
}

/// Public projection of a user for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub registration_id: String,
    pub role: String,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            registration_id: user.registration_id.clone(),
            role: user.role.clone(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. The password arrives here already hashed.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub registration_id: String,
    pub password_hash: String,
    pub role: String,
}
