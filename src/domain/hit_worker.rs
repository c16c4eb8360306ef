//! Background worker applying detached hits to the metrics counter.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, info, warn};

use crate::domain::hit_event::HitEvent;
use crate::domain::repositories::MetricsCounter;

/// Retries after the first failed attempt.
const MAX_RETRIES: usize = 3;

/// Drains hit events and increments the counter for each.
///
/// A failed increment is retried with jittered exponential backoff. An
/// increment that reached the backend but reported an error may be applied
/// twice; hits are counted at least once, except when every attempt fails.
/// Exhausted retries bump the `hits_failed_total` counter.
///
/// Returns once every sender has been dropped and the queue is empty.
pub async fn run_hit_worker(mut rx: mpsc::Receiver<HitEvent>, counter: Arc<dyn MetricsCounter>) {
    info!("Hit worker started");

    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_millis(500))
            .map(jitter)
            .take(MAX_RETRIES);

        match Retry::spawn(strategy, || counter.increment(&event.code)).await {
            Ok(()) => debug!(code = %event.code, "Hit recorded"),
            Err(e) => {
                metrics::counter!("hits_failed_total").increment(1);
                error!(code = %event.code, error = %e, "Failed to record hit");
            }
        }
    }

    info!("Hit worker stopped");
}

/// Spawns [`run_hit_worker`] on the runtime.
pub fn spawn_hit_worker(
    rx: mpsc::Receiver<HitEvent>,
    counter: Arc<dyn MetricsCounter>,
) -> JoinHandle<()> {
    tokio::spawn(run_hit_worker(rx, counter))
}

/// Waits up to `timeout` for the worker to apply every queued hit.
///
/// Every sender must already be dropped or the worker never finishes.
/// Returns `false` if the worker was still running or panicked; hits left in
/// the queue are lost once the runtime shuts down.
pub async fn drain_hit_worker(worker: JoinHandle<()>, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, worker).await {
        Ok(Ok(())) => {
            info!("Hit queue drained");
            true
        }
        Ok(Err(e)) => {
            error!(error = %e, "Hit worker failed before draining");
            false
        }
        Err(_) => {
            warn!(?timeout, "Hit worker did not drain in time, queued hits dropped");
            false
        }
    }
}
