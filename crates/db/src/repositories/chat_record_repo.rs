//! Repository for the `chat_records` table.
//!
//! The table is append-only: this repository exposes no update or delete.
//! An append is a single INSERT, so two concurrent relays for the same user
//! can never clobber each other.

use archon_core::types::DbId;
use sqlx::PgPool;

use crate::models::chat_record::{ChatRecord, NewChatRecord};

const COLUMNS: &str = "id, user_id, query, response, success, response_time_ms, \
                        language, category, created_at";

/// Append and read operations for chat history.
pub struct ChatRecordRepo;

impl ChatRecordRepo {
    /// Append one fully-formed record to a user's history.
    pub async fn append(
        pool: &PgPool,
        user_id: DbId,
        input: &NewChatRecord,
    ) -> Result<ChatRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO chat_records
                 (user_id, query, response, success, response_time_ms, language, category)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatRecord>(&query)
            .bind(user_id)
            .bind(&input.query)
            .bind(&input.response)
            .bind(input.success)
            .bind(input.response_time_ms)
            .bind(&input.language)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// The user's `limit` most recent records in chronological order
    /// (most recent last).
    pub async fn recent_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<ChatRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM (
                 SELECT {COLUMNS} FROM chat_records
                 WHERE user_id = $1
                 ORDER BY id DESC
                 LIMIT $2
             ) AS recent
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, ChatRecord>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Number of records stored for a user.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM chat_records WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }

    /// Total number of records across all users.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chat_records")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
