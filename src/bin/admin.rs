//! CLI administration tool for link-shortener.
//!
//! Provides commands for inspecting links and the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View global counts
//! cargo run --bin admin -- stats
//!
//! # Inspect a link and its clicks
//! cargo run --bin admin -- link aB3x --clicks 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL` or the `DB_*` components, as for the server.

use link_shortener::application::services::HistoryService;
use link_shortener::config::{self, StorageBackend};
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::{PgLinkRepository, PoolSettings, create_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show link and click counts
    Stats,

    /// Show one link and its most recent clicks
    Link {
        /// Short code to look up
        code: String,

        /// Number of most recent clicks to print
        #[arg(short, long, default_value_t = 10)]
        clicks: usize,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("The admin tool only works with STORAGE_BACKEND=postgres");
    }
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = create_pool(database_url, &PoolSettings::from(&config))
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Link { code, clicks } => handle_link(pool, &code, clicks).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of links
/// - Total number of clicks
/// - Links that were never followed
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks")
        .fetch_one(pool)
        .await?;

    let unused_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM links l WHERE NOT EXISTS (SELECT 1 FROM link_clicks c WHERE c.link_id = l.id)",
    )
    .fetch_one(pool)
    .await?;

    println!(
        "  Links:         {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:        {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!(
        "  Never clicked: {}",
        unused_count.to_string().bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Prints a link with its click total and the last `limit` clicks.
async fn handle_link(pool: PgPool, code: &str, limit: usize) -> Result<()> {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let service = HistoryService::new(repository);

    let (link, clicks) = match service.get_link_with_clicks(code).await {
        Ok(found) => found,
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("❌ No link with code '{code}'").red().bold());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", format!("🔗 {}", link.short_code).bright_blue().bold());
    println!();
    println!("  ID:       {}", link.id);
    println!("  Long URL: {}", link.long_url.bright_white());
    println!("  Created:  {}", link.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Updated:  {}", link.updated_at.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "  Clicks:   {}",
        clicks.len().to_string().bright_green().bold()
    );

    if !clicks.is_empty() {
        println!();
        for click in clicks.iter().rev().take(limit) {
            println!(
                "  {}  {:<39}  {}",
                click.clicked_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
                click.ip_address,
                click.user_agent.as_deref().unwrap_or("-")
            );
        }
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
