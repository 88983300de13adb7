//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkRepository`] trait
//! and provide a small API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::LinkService`] - Short link creation
//! - [`services::CodeAllocator`] - Candidate code selection with bounded retries
//! - [`services::RedirectService`] - Code resolution and click recording
//! - [`services::HistoryService`] - Click history read model

pub mod services;
