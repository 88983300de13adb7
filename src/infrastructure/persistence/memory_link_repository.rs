//! In-process implementation of the link store.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Click, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// A link store kept in process memory.
///
/// Used for local development (`STORAGE_BACKEND=memory`) and tests. All
/// writes go through one lock, which is what makes the duplicate-code check
/// and the click append atomic here. Data is lost on restart.
pub struct InMemoryLinkRepository {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    /// Links indexed by `id - 1`.
    links: Vec<StoredLink>,
    ids_by_code: HashMap<String, i64>,
}

struct StoredLink {
    link: Link,
    clicks: Vec<Click>,
}

impl MemoryState {
    fn link_at_mut(&mut self, link_id: i64) -> Option<&mut StoredLink> {
        let index = usize::try_from(link_id).ok()?.checked_sub(1)?;
        self.links.get_mut(index)
    }

    fn link_at(&self, link_id: i64) -> Option<&StoredLink> {
        let index = usize::try_from(link_id).ok()?.checked_sub(1)?;
        self.links.get(index)
    }
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self {
            state: RwLock::new(MemoryState::default()),
        }
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.state.read().await.links.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let state = self.state.read().await;

        Ok(state
            .ids_by_code
            .get(code)
            .and_then(|id| state.link_at(*id))
            .map(|stored| stored.link.clone()))
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut state = self.state.write().await;

        if state.ids_by_code.contains_key(&new_link.short_code) {
            return Err(AppError::DuplicateCode {
                code: new_link.short_code,
            });
        }

        let id = state.links.len() as i64 + 1;
        let now = Utc::now();
        let link = Link::new(id, new_link.short_code, new_link.long_url, now, now);

        state.ids_by_code.insert(link.short_code.clone(), id);
        state.links.push(StoredLink {
            link: link.clone(),
            clicks: Vec::new(),
        });

        Ok(link)
    }

    async fn append_click(&self, link_id: i64, click: Click) -> Result<(), AppError> {
        let mut state = self.state.write().await;

        let stored = state
            .link_at_mut(link_id)
            .ok_or_else(|| AppError::not_found("Link not found"))?;

        stored.clicks.push(click);
        stored.link.updated_at = Utc::now();

        Ok(())
    }

    async fn list_clicks(&self, link_id: i64) -> Result<Vec<Click>, AppError> {
        let state = self.state.read().await;

        Ok(state
            .link_at(link_id)
            .map(|stored| stored.clicks.clone())
            .unwrap_or_default())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
