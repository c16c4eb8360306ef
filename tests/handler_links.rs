mod common;

use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_link_success(pool: PgPool) {
    let (state, _counter) = common::create_test_state(pool.clone());
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "code": "rust", "url": "https://rust-lang.org" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let id = json["shortLinkId"].as_i64().unwrap();

    let stored: i64 = sqlx::query_scalar("SELECT id FROM short_links WHERE code = 'rust'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(id, stored);
}

#[sqlx::test]
async fn test_create_link_lowercases_code(pool: PgPool) {
    let (state, _counter) = common::create_test_state(pool.clone());
    let server = common::create_test_server(state);

    server
        .post("/api/links")
        .json(&json!({ "code": "Tokio", "url": "https://tokio.rs" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    assert_eq!(common::count_links_with_code(&pool, "tokio").await, 1);
}

#[sqlx::test]
async fn test_create_link_duplicate(pool: PgPool) {
    let (state, _counter) = common::create_test_state(pool.clone());
    let server = common::create_test_server(state);

    server
        .post("/api/links")
        .json(&json!({ "code": "dupe", "url": "https://example.com/1" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/links")
        .json(&json!({ "code": "DUPE", "url": "https://example.com/2" }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "Duplicated code" }));

    assert_eq!(common::count_links_with_code(&pool, "dupe").await, 1);
}

#[sqlx::test]
async fn test_create_link_short_code(pool: PgPool) {
    let (state, _counter) = common::create_test_state(pool.clone());
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "code": "go", "url": "https://go.dev" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Validation failed");
    assert!(json["issues"].get("code").is_some());

    assert_eq!(common::count_links_with_code(&pool, "go").await, 0);
}

#[sqlx::test]
async fn test_create_link_reserved_code(pool: PgPool) {
    let (state, _counter) = common::create_test_state(pool.clone());
    let server = common::create_test_server(state);

    for code in ["health", "API"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "code": code, "url": "https://example.com" }))
            .await;

        response.assert_status_bad_request();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["message"], "Validation failed");
        assert_eq!(json["issues"]["code"], "is reserved");
    }

    assert_eq!(common::count_links_with_code(&pool, "health").await, 0);
    assert_eq!(common::count_links_with_code(&pool, "api").await, 0);

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<serde_json::Value>()["status"], "healthy");
}

#[sqlx::test]
async fn test_create_link_invalid_url(pool: PgPool) {
    let (state, _counter) = common::create_test_state(pool);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "code": "broken", "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert!(json["issues"].get("url").is_some());
}

#[sqlx::test]
async fn test_create_link_missing_field(pool: PgPool) {
    let (state, _counter) = common::create_test_state(pool);
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "code": "nourl" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_list_links_newest_first(pool: PgPool) {
    common::create_test_link(&pool, "older", "https://example.com/old").await;
    common::create_test_link(&pool, "newer", "https://example.com/new").await;

    let (state, _counter) = common::create_test_state(pool);
    let server = common::create_test_server(state);

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["code"], "newer");
    assert_eq!(items[0]["original_url"], "https://example.com/new");
    assert!(items[0]["id"].is_i64());
    assert!(items[0]["created_at"].is_string());
    assert_eq!(items[1]["code"], "older");
}

#[sqlx::test]
async fn test_list_links_empty(pool: PgPool) {
    let (state, _counter) = common::create_test_state(pool);
    let server = common::create_test_server(state);

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}
