//! Business logic services for the application layer.

pub mod code_allocator;
pub mod history_service;
pub mod link_service;
pub mod redirect_service;

pub use code_allocator::CodeAllocator;
pub use history_service::HistoryService;
pub use link_service::LinkService;
pub use redirect_service::{ClickRecording, RedirectService};
