//! Read model over a link's click history.

use std::sync::Arc;

use crate::domain::entities::{Click, ClickHistory, Link};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

pub struct HistoryService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> HistoryService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Click count and timestamps for `code`, in append order.
    ///
    /// Reading the history never records a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn get_click_history(&self, code: &str) -> Result<ClickHistory, AppError> {
        let (_, clicks) = self.get_link_with_clicks(code).await?;
        Ok(ClickHistory::from_clicks(&clicks))
    }

    /// The link and its full click log.
    pub async fn get_link_with_clicks(&self, code: &str) -> Result<(Link, Vec<Click>), AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))?;

        let clicks = self.link_repository.list_clicks(link.id).await?;

        Ok((link, clicks))
    }
}
