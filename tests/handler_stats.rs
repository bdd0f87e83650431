mod common;

use axum::{routing::get, Router};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use storefront::api::handlers::stats_handler;

fn stats_app(state: storefront::AppState) -> Router {
    Router::new()
        .route("/api/admin/stats", get(stats_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_stats_counts_distinct_ips_not_records(pool: PgPool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(stats_app(state)).unwrap();

    // Three checkout records from two distinct IPs, one buy-now.
    common::insert_action(&pool, "checkout", Some("1.1.1.1")).await;
    common::insert_action(&pool, "checkout", Some("1.1.1.1")).await;
    common::insert_action(&pool, "checkout", Some("5.5.5.5")).await;
    common::insert_action(&pool, "buy_now", Some("2.2.2.2")).await;

    let response = server.get("/api/admin/stats").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_checkouts"], 2);
    assert_eq!(json["total_buy_nows"], 1);
}

#[sqlx::test]
async fn test_stats_counts_missing_ips_as_one_value(pool: PgPool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(stats_app(state)).unwrap();

    common::insert_action(&pool, "checkout", None).await;
    common::insert_action(&pool, "checkout", None).await;
    common::insert_action(&pool, "checkout", Some("1.1.1.1")).await;

    let response = server.get("/api/admin/stats").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    // Two NULL-IP records together count as one distinct value.
    assert_eq!(json["total_checkouts"], 2);
}

#[sqlx::test]
async fn test_stats_today_excludes_older_records(pool: PgPool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(stats_app(state)).unwrap();

    common::insert_action(&pool, "checkout", Some("1.1.1.1")).await;
    common::insert_action_at(
        &pool,
        "checkout",
        Some("9.9.9.9"),
        None,
        Utc::now() - Duration::days(3),
    )
    .await;

    let response = server.get("/api/admin/stats").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_checkouts"], 2);
    assert_eq!(json["today_checkouts"], 1);
}

#[sqlx::test]
async fn test_stats_recent_groups_shape(pool: PgPool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(stats_app(state)).unwrap();

    let base = Utc::now() - Duration::minutes(10);
    common::insert_action_at(&pool, "checkout", Some("1.1.1.1"), Some("Germany"), base).await;
    common::insert_action_at(
        &pool,
        "buy_now",
        Some("2.2.2.2"),
        Some("Japan"),
        base + Duration::minutes(1),
    )
    .await;
    common::insert_action_at(
        &pool,
        "checkout",
        Some("1.1.1.1"),
        Some("Germany"),
        base + Duration::minutes(2),
    )
    .await;

    let response = server.get("/api/admin/stats").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let groups = json["recent_actions_grouped"].as_array().unwrap();

    assert_eq!(groups.len(), 2);
    // 1.1.1.1 acted last, so its group leads.
    assert_eq!(groups[0]["ip_address"], "1.1.1.1");
    assert_eq!(groups[0]["action_count"], 2);
    assert_eq!(groups[0]["country"], "Germany");
    assert_eq!(groups[1]["ip_address"], "2.2.2.2");
    assert_eq!(groups[1]["action_count"], 1);

    // Within a group, newest first.
    let actions = groups[0]["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0]["action"], "checkout");
    assert_eq!(
        groups[0]["latest_action"], actions[0]["created_at"],
        "latest_action mirrors the newest record"
    );
}
