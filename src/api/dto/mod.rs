//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod health;
pub mod history;
pub mod link;
pub mod response;

pub use health::HealthResponse;
pub use history::HistoryResponse;
pub use link::{ClickResponse, CreateLinkRequest, LinkResponse};
pub use response::ApiResponse;
