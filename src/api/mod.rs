//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses with the `{ success, message, data | errors }` envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extractors`] - Client information extraction
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS middleware
//! - [`routes`] - Route table

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
