//! HTTP-level integration tests for the `/api/user/profile` route.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth};
use sqlx::PgPool;

const NO_ASSISTANT: &str = "http://127.0.0.1:9";

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_returns_the_callers_projection(pool: PgPool) {
    common::register_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "S001",
        "p@ss",
        "user",
    )
    .await;
    let token = common::login_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "S001",
        "p@ss",
    )
    .await;

    let app = common::build_test_app(pool, NO_ASSISTANT);
    let response = get_auth(app, "/api/user/profile", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["registrationId"], "S001");
    assert_eq!(json["role"], "user");
    assert!(json["createdAt"].is_string());
    assert!(
        json.get("passwordHash").is_none(),
        "the hash must never be returned"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_requires_a_token(pool: PgPool) {
    let app = common::build_test_app(pool, NO_ASSISTANT);
    let response = get(app, "/api/user/profile").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A syntactically valid token for a deleted account hits 404 on the
/// profile fetch: the token is stateless, the row is gone.
#[sqlx::test(migrations = "../db/migrations")]
async fn profile_of_a_deleted_account_returns_404(pool: PgPool) {
    common::register_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "S002",
        "p@ss",
        "user",
    )
    .await;
    let token = common::login_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "S002",
        "p@ss",
    )
    .await;

    // Admin deletes the account out from under the live token.
    common::register_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "A001",
        "p@ss",
        "admin",
    )
    .await;
    let admin = common::login_user(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "A001",
        "p@ss",
    )
    .await;
    let response = common::delete_auth(
        common::build_test_app(pool.clone(), NO_ASSISTANT),
        "/api/admin/users/S002",
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool, NO_ASSISTANT);
    let response = get_auth(app, "/api/user/profile", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
