//! DTO for the click history endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickHistory;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub his_clicks_total: usize,
    /// Click timestamps in the order they were recorded.
    pub clean_his_clicks: Vec<DateTime<Utc>>,
}

impl From<ClickHistory> for HistoryResponse {
    fn from(history: ClickHistory) -> Self {
        Self {
            his_clicks_total: history.total,
            clean_his_clicks: history.timestamps,
        }
    }
}
