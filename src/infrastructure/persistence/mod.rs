//! Link store implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL storage, uniqueness enforced by a table constraint
//! - [`InMemoryLinkRepository`] - Process-local storage for development and tests
//!
//! [`create_pool`] builds the bounded PostgreSQL pool shared by the server
//! and the admin CLI.

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod pool;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pool::{PoolSettings, create_pool};
