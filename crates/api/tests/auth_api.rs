//! HTTP-level integration tests for registration, login, and token
//! introspection.

mod common;

use archon_api::config::Environment;
use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use sqlx::PgPool;

/// The assistant is never contacted by these tests.
const NO_ASSISTANT: &str = "http://127.0.0.1:9";

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Register then login with the same credentials succeeds and preserves
/// the registered role.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_then_login_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone(), NO_ASSISTANT);
    let body = serde_json::json!({
        "registrationId": "S001",
        "password": "p@ss",
        "role": "user",
    });
    let response = post_json(app, "/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["registrationId"], "S001");
    assert_eq!(json["role"], "user");
    assert!(json["createdAt"].is_string());
    assert!(
        json.get("passwordHash").is_none(),
        "the hash must never be returned"
    );

    let app = common::build_test_app(pool, NO_ASSISTANT);
    let body = serde_json::json!({ "registrationId": "S001", "password": "p@ss" });
    let response = post_json(app, "/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["registrationId"], "S001");
    assert_eq!(json["role"], "user");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_with_missing_fields_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool, NO_ASSISTANT);
    let body = serde_json::json!({ "registrationId": "S002" });
    let response = post_json(app, "/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_with_unknown_role_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool, NO_ASSISTANT);
    let body = serde_json::json!({
        "registrationId": "S003",
        "password": "p@ss",
        "role": "superadmin",
    });
    let response = post_json(app, "/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_returns_409(pool: PgPool) {
    common::register_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "S004",
        "p@ss",
        "user",
    )
    .await;

    let app = common::build_test_app(pool, NO_ASSISTANT);
    let body = serde_json::json!({
        "registrationId": "S004",
        "password": "other",
        "role": "admin",
    });
    let response = post_json(app, "/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// Registration is a provisioning operation; in production it is shut off
/// outright.
#[sqlx::test(migrations = "../db/migrations")]
async fn register_is_disabled_in_production(pool: PgPool) {
    let app = common::build_test_app_with_env(pool, NO_ASSISTANT, Environment::Production);
    let body = serde_json::json!({
        "registrationId": "S005",
        "password": "p@ss",
        "role": "user",
    });
    let response = post_json(app, "/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_missing_fields_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool, NO_ASSISTANT);
    let body = serde_json::json!({ "registrationId": "S006" });
    let response = post_json(app, "/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Wrong-password and unknown-id logins must be indistinguishable: same
/// status, same body.
#[sqlx::test(migrations = "../db/migrations")]
async fn failed_logins_do_not_reveal_which_ids_exist(pool: PgPool) {
    common::register_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "S007",
        "right-password",
        "user",
    )
    .await;

    let app = common::build_test_app(pool.clone(), NO_ASSISTANT);
    let wrong_password = post_json(
        app,
        "/auth/login",
        serde_json::json!({ "registrationId": "S007", "password": "wrong" }),
    )
    .await;

    let app = common::build_test_app(pool, NO_ASSISTANT);
    let unknown_id = post_json(
        app,
        "/auth/login",
        serde_json::json!({ "registrationId": "GHOST", "password": "wrong" }),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_id.status(), StatusCode::UNAUTHORIZED);

    let body_a = body_json(wrong_password).await;
    let body_b = body_json(unknown_id).await;
    assert_eq!(body_a, body_b, "the two failures must be indistinguishable");
}

// ---------------------------------------------------------------------------
// Token introspection
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn me_returns_the_decoded_claims(pool: PgPool) {
    common::register_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "S008",
        "p@ss",
        "admin",
    )
    .await;
    let token = common::login_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "S008",
        "p@ss",
    )
    .await;

    let app = common::build_test_app(pool, NO_ASSISTANT);
    let response = get_auth(app, "/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["registrationId"], "S008");
    assert_eq!(json["role"], "admin");
    assert!(json["issuedAt"].is_number());
    assert!(json["expiresAt"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool, NO_ASSISTANT);
    let response = get(app, "/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn me_with_garbage_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool, NO_ASSISTANT);
    let response = get_auth(app, "/auth/me", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A token signed under a different secret is rejected like any other
/// invalid token -- same generic message.
#[sqlx::test(migrations = "../db/migrations")]
async fn me_with_foreign_token_returns_401(pool: PgPool) {
    let foreign_config = archon_api::auth::jwt::JwtConfig {
        secret: "a-different-secret-entirely".to_string(),
        token_ttl_hours: 24,
    };
    let token = archon_api::auth::jwt::generate_token("S009", "admin", &foreign_config)
        .expect("token generation should succeed");

    let app = common::build_test_app(pool, NO_ASSISTANT);
    let response = get_auth(app, "/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
