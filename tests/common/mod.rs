#![allow(dead_code)]

use axum_test::TestServer;
use hitlink::domain::hit_event::HitEvent;
use hitlink::infrastructure::counter::MemoryMetricsCounter;
use hitlink::routes::app_router;
use hitlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO short_links (code, original_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links_with_code(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// State with awaited counting over an in-memory counter the test can inspect.
pub fn create_test_state(pool: PgPool) -> (AppState, Arc<MemoryMetricsCounter>) {
    let counter = Arc::new(MemoryMetricsCounter::new());
    let state = AppState::new(Arc::new(pool), counter.clone(), None);

    (state, counter)
}

/// State with detached counting; hits land on the returned receiver.
pub fn create_detached_state(pool: PgPool) -> (AppState, mpsc::Receiver<HitEvent>) {
    let counter = Arc::new(MemoryMetricsCounter::new());
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(Arc::new(pool), counter, Some(tx));

    (state, rx)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state)).unwrap()
}
