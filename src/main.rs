use anyhow::Context;
use link_shortener::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Invalid configuration")?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber. `RUST_LOG` directives take precedence
/// over the configured default level.
fn init_tracing(log_level: &str, log_format: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
