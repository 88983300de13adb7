//! DTOs for link creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{Click, Link};
use crate::utils::url_validator::validate_long_url;

/// Request to shorten a single URL.
///
/// `long_url` is optional at the serde level so a missing field is reported
/// as a validation message rather than a JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(
        required(message = "Please provide long_url"),
        length(min = 1, message = "long_url cannot be empty"),
        custom(function = "validate_long_url_field")
    )]
    pub long_url: Option<String>,
}

/// Adapts [`validate_long_url`] to the validator derive.
///
/// Empty input is left to the `length` rule so it is reported once.
fn validate_long_url_field(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    validate_long_url(value).map_err(|e| {
        ValidationError::new("long_url").with_message(e.to_string().into())
    })
}

/// Click as it appears inside a link.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub user_agent: Option<String>,
    pub ip_address: String,
    pub clicked_at: DateTime<Utc>,
}

impl From<Click> for ClickResponse {
    fn from(click: Click) -> Self {
        Self {
            user_agent: click.user_agent,
            ip_address: click.ip_address,
            clicked_at: click.clicked_at,
        }
    }
}

/// Full link representation returned on creation.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub his_clicks: Vec<ClickResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn new(link: Link, clicks: Vec<Click>) -> Self {
        Self {
            id: link.id,
            long_url: link.long_url,
            short_code: link.short_code,
            his_clicks: clicks.into_iter().map(ClickResponse::from).collect(),
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

impl From<Link> for LinkResponse {
    /// A link with no clicks yet.
    fn from(link: Link) -> Self {
        Self::new(link, Vec::new())
    }
}
