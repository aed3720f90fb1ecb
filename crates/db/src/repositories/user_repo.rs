//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, registration_id, password_hash, role, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A concurrent insert with the same registration id fails with a
    /// unique-constraint violation (`uq_users_registration_id`); callers
    /// must not rely on a prior existence check alone.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (registration_id, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.registration_id)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by registration id (case-sensitive).
    pub async fn find_by_registration_id(
        pool: &PgPool,
        registration_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE registration_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(registration_id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Delete a user by registration id, returning the deleted row.
    ///
    /// The user's chat records go with it (`ON DELETE CASCADE`).
    /// Returns `None` if no such user exists.
    pub async fn delete_by_registration_id(
        pool: &PgPool,
        registration_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "DELETE FROM users WHERE registration_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(registration_id)
            .fetch_optional(pool)
            .await
    }

    /// Count users holding the given role.
    pub async fn count_by_role(pool: &PgPool, role: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
