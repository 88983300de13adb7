//! PostgreSQL connection pool construction.

use std::str::FromStr;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::Config;

/// Pool sizing and timeouts taken from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout_ms: u64,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl From<&Config> for PoolSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_connections: config.db_max_connections,
            acquire_timeout: Duration::from_secs(config.db_acquire_timeout),
            statement_timeout_ms: config.db_statement_timeout_ms,
            idle_timeout: Duration::from_secs(config.db_idle_timeout),
            max_lifetime: Duration::from_secs(config.db_max_lifetime),
        }
    }
}

/// Connects a bounded pool.
///
/// Every connection runs with a server-side `statement_timeout`, so a stuck
/// query is cancelled by PostgreSQL and surfaces as a store failure instead of
/// holding the connection indefinitely.
pub async fn create_pool(database_url: &str, settings: &PoolSettings) -> Result<PgPool, sqlx::Error> {
    let statement_timeout = format!("{}ms", settings.statement_timeout_ms);
    let options = PgConnectOptions::from_str(database_url)?
        .options([("statement_timeout", statement_timeout.as_str())]);

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect_with(options)
        .await?;

    tracing::debug!(
        max_connections = settings.max_connections,
        statement_timeout_ms = settings.statement_timeout_ms,
        "Connection pool created"
    );

    Ok(pool)
}
