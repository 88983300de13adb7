//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for links and their click history.
///
/// Short-code uniqueness is enforced by the `links_short_code_key` constraint,
/// so two racing inserts of the same code can never both commit. Clicks live
/// in the append-only `link_clicks` table and are ordered by its sequence.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.short_code,
            row.long_url,
            row.created_at,
            row.updated_at,
        )
    }
}

#[derive(sqlx::FromRow)]
struct ClickRow {
    user_agent: Option<String>,
    ip_address: String,
    clicked_at: DateTime<Utc>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click::at(row.user_agent, row.ip_address, row.clicked_at)
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, long_url, created_at, updated_at
            FROM links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_code, long_url)
            VALUES ($1, $2)
            RETURNING id, short_code, long_url, created_at, updated_at
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.long_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                AppError::DuplicateCode {
                    code: new_link.short_code.clone(),
                }
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn append_click(&self, link_id: i64, click: Click) -> Result<(), AppError> {
        // One statement: the row lock taken by the UPDATE serializes appends
        // per link, and no click row is written for an unknown id.
        let result = sqlx::query(
            r#"
            WITH touched AS (
                UPDATE links SET updated_at = now()
                WHERE id = $1
                RETURNING id
            )
            INSERT INTO link_clicks (link_id, user_agent, ip_address, clicked_at)
            SELECT id, $2, $3, $4 FROM touched
            "#,
        )
        .bind(link_id)
        .bind(click.user_agent)
        .bind(click.ip_address)
        .bind(click.clicked_at)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Link not found"));
        }

        Ok(())
    }

    async fn list_clicks(&self, link_id: i64) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT user_agent, ip_address, clicked_at
            FROM link_clicks
            WHERE link_id = $1
            ORDER BY id
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
