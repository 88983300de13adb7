//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short link is followed.
///
/// Clicks belong to exactly one link and are never addressed on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub user_agent: Option<String>,
    pub ip_address: String,
    pub clicked_at: DateTime<Utc>,
}

impl Click {
    /// Creates a click stamped with the current time.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = Click::new(Some("Mozilla/5.0".to_string()), "203.0.113.7".to_string());
    /// ```
    pub fn new(user_agent: Option<String>, ip_address: String) -> Self {
        Self::at(user_agent, ip_address, Utc::now())
    }

    /// Creates a click with an explicit timestamp.
    pub fn at(user_agent: Option<String>, ip_address: String, clicked_at: DateTime<Utc>) -> Self {
        Self {
            user_agent,
            ip_address,
            clicked_at,
        }
    }
}

/// Click history of a single link, in append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickHistory {
    pub total: usize,
    pub timestamps: Vec<DateTime<Utc>>,
}

impl ClickHistory {
    pub fn from_clicks(clicks: &[Click]) -> Self {
        Self {
            total: clicks.len(),
            timestamps: clicks.iter().map(|c| c.clicked_at).collect(),
        }
    }
}
