mod common;

use axum::{middleware, routing::get, Router};
use axum_test::TestServer;
use sqlx::PgPool;
use storefront::api::handlers::stats_handler;
use storefront::api::middleware::auth;

fn admin_app(state: storefront::AppState) -> Router {
    Router::new()
        .route("/api/admin/stats", get(stats_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state)
}

#[sqlx::test]
async fn test_missing_token_is_unauthorized(pool: PgPool) {
    let state = common::create_test_state(pool).await;
    let server = TestServer::new(admin_app(state)).unwrap();

    let response = server.get("/api/admin/stats").await;

    response.assert_status_unauthorized();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
}

#[sqlx::test]
async fn test_wrong_token_is_unauthorized(pool: PgPool) {
    let state = common::create_test_state(pool).await;
    let server = TestServer::new(admin_app(state)).unwrap();

    server
        .get("/api/admin/stats")
        .authorization_bearer("not-the-admin-token")
        .await
        .assert_status_unauthorized();
}

#[sqlx::test]
async fn test_valid_token_passes(pool: PgPool) {
    let state = common::create_test_state(pool).await;
    let server = TestServer::new(admin_app(state)).unwrap();

    server
        .get("/api/admin/stats")
        .authorization_bearer(common::ADMIN_TOKEN)
        .await
        .assert_status_ok();
}
