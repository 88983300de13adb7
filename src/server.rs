//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, worker spawning, and Axum server lifecycle.

use crate::application::services::ClickRecording;
use crate::config::{ClickMode, Config, StorageBackend};
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{
    InMemoryLinkRepository, PgLinkRepository, PoolSettings, create_pool,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Longest time the click worker gets to drain its queue on shutdown.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (PostgreSQL pool + migrations, or in-memory)
/// - Background click worker (queued click mode only)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config).await?;

    let (recording, worker) = match config.click_mode {
        ClickMode::Inline => (ClickRecording::Inline, None),
        ClickMode::Queued => {
            let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
            let handle = tokio::spawn(run_click_worker(
                click_rx,
                repository.clone(),
                config.click_retry_attempts,
            ));
            (ClickRecording::Queued(click_tx), Some(handle))
        }
    };

    let state = AppState::new(
        repository,
        config.short_code_length,
        config.code_max_attempts,
        recording,
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router owned the last queue sender; the worker stops once drained.
    if let Some(handle) = worker {
        tracing::info!("Draining click queue...");
        match timeout(DRAIN_TIMEOUT, handle).await {
            Ok(Ok(())) => tracing::info!("Click queue drained"),
            Ok(Err(e)) => tracing::error!("Click worker failed: {e}"),
            Err(_) => tracing::error!(
                "Click queue not drained after {} seconds, pending clicks lost",
                DRAIN_TIMEOUT.as_secs()
            ),
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the configured link store.
async fn connect_store(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.storage_backend {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres storage backend")?;

            let pool = create_pool(database_url, &PoolSettings::from(config))
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store, links are lost on restart");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping listener...");
}
