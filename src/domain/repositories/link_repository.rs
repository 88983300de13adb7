//! Repository trait for the link store.

use crate::domain::entities::{Click, Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistent mapping from short code to long URL plus an append-only click log.
///
/// The store is the authority on short-code uniqueness: [`Self::insert`] must
/// reject a duplicate code atomically, whatever the caller checked beforehand.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its exact short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Creates a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the short code is already taken.
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Appends one click to a link's history in a single atomic operation.
    ///
    /// Concurrent appends to the same link never lose events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the given id.
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn append_click(&self, link_id: i64, click: Click) -> Result<(), AppError>;

    /// Lists a link's clicks in append order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store cannot be reached.
    async fn list_clicks(&self, link_id: i64) -> Result<Vec<Click>, AppError>;

    /// Returns whether the store is reachable.
    async fn health_check(&self) -> bool;
}
