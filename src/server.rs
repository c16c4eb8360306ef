//! HTTP server initialization and runtime setup.
//!
//! Builds the store handles, spawns the hit worker when counting is
//! detached, and runs the Axum server until shutdown.

use crate::application::services::CountingMode;
use crate::config::Config;
use crate::domain::hit_worker::{drain_hit_worker, spawn_hit_worker};
use crate::domain::repositories::MetricsCounter;
use crate::infrastructure::counter::{MemoryMetricsCounter, RedisMetricsCounter};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// How long shutdown waits for the hit worker to empty the queue.
const HIT_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Metrics counter (Redis, or in-memory when Redis is not configured)
/// - Background hit worker (detached counting only)
/// - Axum HTTP server
///
/// On shutdown, queued detached hits are drained before returning.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Redis is configured but unreachable
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    let counter = connect_counter(&config).await?;

    let (hit_tx, hit_worker) = match config.counting_mode {
        CountingMode::Awaited => (None, None),
        CountingMode::Detached => {
            let (hit_tx, hit_rx) = mpsc::channel(config.hit_queue_capacity);
            let worker = spawn_hit_worker(hit_rx, counter.clone());
            (Some(hit_tx), Some(worker))
        }
    };

    let state = AppState::new(Arc::new(pool), counter, hit_tx);

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    // The router held the last sender; it is gone once serve returns.
    if let Some(worker) = hit_worker {
        drain_hit_worker(worker, HIT_DRAIN_TIMEOUT).await;
    }

    Ok(())
}

async fn connect_database(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Redis is the counter of record; the in-memory counter only stands in
/// when Redis is not configured at all.
async fn connect_counter(config: &Config) -> Result<Arc<dyn MetricsCounter>> {
    match &config.redis_url {
        Some(redis_url) => {
            let counter = RedisMetricsCounter::connect(redis_url, config.metrics_key.clone())
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Metrics counter: Redis");
            Ok(Arc::new(counter))
        }
        None => {
            tracing::warn!("REDIS_URL not set, hit counts are kept in memory and lost on restart");
            Ok(Arc::new(MemoryMetricsCounter::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
