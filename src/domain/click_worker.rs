//! Background worker appending queued click events.
//!
//! A single consumer drains the queue, so events reach the store in the order
//! they were enqueued. Transient store failures are retried with jittered
//! exponential backoff; any other failure is logged and counted.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tokio::sync::mpsc;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, info};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Upper bound for a single backoff delay.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Consumes click events until the queue is closed and drained.
pub async fn run_click_worker<R>(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<R>,
    retry_attempts: usize,
) where
    R: LinkRepository + ?Sized,
{
    info!("Click worker started");

    while let Some(event) = rx.recv().await {
        // failures are already logged and counted
        let _ = record_click(repository.as_ref(), &event, retry_attempts).await;
    }

    info!("Click queue closed, worker stopped");
}

/// Appends one queued click, retrying while the store is unavailable.
pub async fn record_click<R>(
    repository: &R,
    event: &ClickEvent,
    retry_attempts: usize,
) -> Result<(), AppError>
where
    R: LinkRepository + ?Sized,
{
    let strategy = ExponentialBackoff::from_millis(2)
        .factor(10)
        .max_delay(MAX_RETRY_DELAY)
        .map(jitter)
        .take(retry_attempts);

    let result = RetryIf::spawn(
        strategy,
        || repository.append_click(event.link_id, event.click.clone()),
        |e: &AppError| matches!(e, AppError::StoreUnavailable { .. }),
    )
    .await;

    match &result {
        Ok(()) => {
            counter!("clicks_recorded_total").increment(1);
            debug!(short_code = %event.short_code, "Click recorded");
        }
        Err(e) => {
            counter!("clicks_failed_total").increment(1);
            error!(
                short_code = %event.short_code,
                link_id = event.link_id,
                error = %e,
                "Failed to record click"
            );
        }
    }

    result
}
