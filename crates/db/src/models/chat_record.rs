//! Chat history entity model and DTOs.

use archon_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One relayed exchange, as stored in the `chat_records` table.
#[derive(Debug, Clone, FromRow)]
pub struct ChatRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub query: String,
    pub response: String,
    pub success: bool,
    pub response_time_ms: i64,
    pub language: String,
    pub category: String,
    pub created_at: Timestamp,
}

/// Wire representation of a chat record (internal ids omitted).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecordResponse {
    pub query: String,
    pub response: String,
    pub success: bool,
    pub response_time_ms: i64,
    pub language: String,
    pub category: String,
    pub created_at: Timestamp,
}

impl From<ChatRecord> for ChatRecordResponse {
    fn from(record: ChatRecord) -> Self {
        Self {
            query: record.query,
            response: record.response,
            success: record.success,
            response_time_ms: record.response_time_ms,
            language: record.language,
            category: record.category,
            created_at: record.created_at,
        }
    }
}

/// DTO for appending a record. The owning user is passed separately so the
/// identity always comes from the verified request context.
#[derive(Debug, Clone)]
pub struct NewChatRecord {
    pub query: String,
    pub response: String,
    pub success: bool,
    pub response_time_ms: i64,
    pub language: String,
    pub category: String,
}
