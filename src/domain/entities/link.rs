//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link.
///
/// `short_code` and `long_url` never change after creation. The click
/// history is not embedded here; it is read separately through
/// [`crate::domain::repositories::LinkRepository::list_clicks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub long_url: String,
}
