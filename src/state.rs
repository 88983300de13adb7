//! Shared application state injected into all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::application::services::{ClickRecording, HistoryService, LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;

/// Immutable per-process state, cloned into every request.
///
/// Services are built over `dyn LinkRepository` so the same router serves
/// both the PostgreSQL and the in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub redirect_service: Arc<RedirectService<dyn LinkRepository>>,
    pub history_service: Arc<HistoryService<dyn LinkRepository>>,
    pub link_repository: Arc<dyn LinkRepository>,
    /// Length every generated and accepted short code has.
    pub code_length: usize,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        code_length: usize,
        code_max_attempts: u32,
        recording: ClickRecording,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(
                link_repository.clone(),
                code_length,
                code_max_attempts,
            )),
            redirect_service: Arc::new(RedirectService::new(link_repository.clone(), recording)),
            history_service: Arc::new(HistoryService::new(link_repository.clone())),
            link_repository,
            code_length,
            started_at: Instant::now(),
        }
    }
}
