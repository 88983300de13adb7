//! Click event model for queued click recording.

use crate::domain::entities::Click;

/// A click waiting in the queue for the background worker.
///
/// Created by the redirect path once the link has been resolved, so the
/// worker can append without looking the link up again. The short code is
/// carried for logging only.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub short_code: String,
    pub click: Click,
}

impl ClickEvent {
    pub fn new(link_id: i64, short_code: impl Into<String>, click: Click) -> Self {
        Self {
            link_id,
            short_code: short_code.into(),
            click,
        }
    }
}
