//! Handlers for the `/auth` resource (register, login, me).

use archon_core::error::CoreError;
use archon_core::roles;
use archon_db::models::user::{CreateUser, UserResponse};
use archon_db::repositories::UserRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// One message for both unknown-id and wrong-password logins, so callers
/// cannot probe which registration ids exist.
const INVALID_CREDENTIALS: &str = "Invalid registration number or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
///
/// Fields are optional so absence surfaces as our 400 validation error
/// rather than a body-deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub registration_id: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub registration_id: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub registration_id: String,
    /// Returned so the UI can route without decoding the token.
    pub role: String,
}

/// Decoded claims returned by `GET /auth/me`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub registration_id: String,
    pub role: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Provision a new identity. Disabled entirely when the process runs in
/// production; this is a trusted-environment operation.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if state.config.environment.is_production() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Registration is disabled in production".into(),
        )));
    }

    let registration_id = input.registration_id.as_deref().unwrap_or("").trim();
    let password = input.password.as_deref().unwrap_or("");
    let role = input.role.as_deref().unwrap_or("");

    if registration_id.is_empty() || password.is_empty() || role.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Missing required fields: registrationId, password, role".into(),
        )));
    }
    if !roles::is_valid_role(role) {
        return Err(AppError::Core(CoreError::Validation(
            "Role must be 'user' or 'admin'".into(),
        )));
    }

    // Friendly duplicate check. The unique index still backstops the race
    // between two concurrent registrations (surfacing as 409 via the sqlx
    // error classifier).
    if UserRepo::find_by_registration_id(&state.pool, registration_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "User with this registration number already exists".into(),
        )));
    }

    let hashed = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        registration_id: registration_id.to_string(),
        password_hash: hashed,
        role: role.to_string(),
    };
    let user = UserRepo::create(&state.pool, &create_dto).await?;

    tracing::info!(registration_id = %user.registration_id, role = %user.role, "New user registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// POST /auth/login
///
/// Authenticate with registration id + password. Returns a signed token
/// whose claims freeze the role at issuance time.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let registration_id = input.registration_id.as_deref().unwrap_or("").trim();
    let password = input.password.as_deref().unwrap_or("");

    if registration_id.is_empty() || password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Missing required fields: registrationId, password".into(),
        )));
    }

    let user = UserRepo::find_by_registration_id(&state.pool, registration_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let token = generate_token(&user.registration_id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(registration_id = %user.registration_id, role = %user.role, "User logged in");

    Ok(Json(LoginResponse {
        token,
        registration_id: user.registration_id,
        role: user.role,
    }))
}

/// GET /auth/me
///
/// Echo the verified claims back to the caller. Any valid token passes;
/// there is no role requirement on introspection.
pub async fn me(user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        registration_id: user.registration_id,
        role: user.role,
        issued_at: user.issued_at,
        expires_at: user.expires_at,
    })
}
