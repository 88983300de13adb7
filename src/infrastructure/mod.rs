//! Infrastructure layer for external integrations.
//!
//! This layer implements the link store contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory repository implementations
//!   plus pool construction

pub mod persistence;
