//! Handler for the chat relay (`POST /api/chat`).

use std::time::Instant;

use archon_core::error::CoreError;
use archon_db::models::chat_record::NewChatRecord;
use archon_db::repositories::{ChatRecordRepo, UserRepo};
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireMember;
use crate::state::AppState;

/// Recorded when the assistant omits its language tag.
const DEFAULT_LANGUAGE: &str = "en";
/// Recorded when the assistant omits its category tag.
const DEFAULT_CATEGORY: &str = "general";

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: Option<String>,
}

/// Successful relay response. Mirrors the record appended to history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub answer: String,
    pub success: bool,
    pub response_time_ms: i64,
    pub language: String,
    pub category: String,
}

/// POST /api/chat
///
/// Forward the query to the assistant under the caller's own bearer token,
/// then append exactly one record to the caller's history. Failure anywhere
/// before the append leaves the history untouched, so the caller can retry
/// freely; the append itself is a single INSERT and is all-or-nothing.
pub async fn chat(
    State(state): State<AppState>,
    RequireMember(user): RequireMember,
    Json(input): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let query = input.query.as_deref().unwrap_or("").trim();
    if query.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Query must not be empty".into(),
        )));
    }

    // The identity comes from the verified token, never from the body. A
    // stateless token can outlive its account; that ends here.
    let account = UserRepo::find_by_registration_id(&state.pool, &user.registration_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let started = Instant::now();
    let reply = state.assistant.ask(&user.bearer, query).await?;
    let response_time_ms = started.elapsed().as_millis() as i64;

    let record = ChatRecordRepo::append(
        &state.pool,
        account.id,
        &NewChatRecord {
            query: query.to_string(),
            response: reply.response,
            success: true,
            response_time_ms,
            language: reply
                .language
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            category: reply
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        },
    )
    .await?;

    tracing::info!(
        registration_id = %user.registration_id,
        response_time_ms,
        "Chat relayed"
    );

    Ok(Json(ChatResponse {
        answer: record.response,
        success: record.success,
        response_time_ms: record.response_time_ms,
        language: record.language,
        category: record.category,
    }))
}
