//! Long URL validation.
//!
//! Links are stored exactly as submitted, so this module only accepts or
//! rejects input and never rewrites it.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use url::Url;

/// Maximum accepted length of a long URL, in characters.
pub const MAX_URL_LENGTH: usize = 2048;

/// Patterns that indicate script injection attempts. Matched case-insensitively
/// anywhere in the URL.
const DENYLIST: &[&str] = &[
    r"<script[\s\S]*?>[\s\S]*?</script>",
    r"javascript:",
    r"data:",
    r"vbscript:",
    r"onload",
    r"onerror",
    r"onclick",
    r"onmouseover",
    r"onfocus",
    r"onblur",
    r"<iframe",
    r"<object",
    r"<embed",
    r"<form",
    r"eval\(",
    r"alert\(",
    r"confirm\(",
    r"prompt\(",
];

static DENYLIST_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DENYLIST
        .iter()
        .filter_map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
        })
        .collect()
});

/// Reasons a long URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("long_url cannot be empty")]
    Empty,

    #[error("Invalid URL format")]
    InvalidFormat,

    #[error("URL must start with http:// or https://")]
    MissingHttpPrefix,

    #[error("URL contains potentially dangerous content")]
    DangerousContent,

    #[error("URL protocol not allowed")]
    UnsupportedProtocol,

    #[error("URL is too long (max 2048 characters)")]
    TooLong,
}

/// Validates a long URL submitted for shortening.
///
/// Rules are applied in order and the first violation is returned:
///
/// 1. Not empty
/// 2. Parses as an absolute URL
/// 3. Literally starts with `http://` or `https://`
/// 4. Contains no denylisted script-injection pattern
/// 5. Scheme is `http` or `https`
/// 6. At most [`MAX_URL_LENGTH`] characters
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://example.com").is_ok());
/// assert_eq!(
///     validate_long_url("javascript:alert(1)"),
///     Err(UrlValidationError::MissingHttpPrefix)
/// );
/// ```
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let parsed = Url::parse(input).map_err(|_| UrlValidationError::InvalidFormat)?;

    if !(input.starts_with("http://") || input.starts_with("https://")) {
        return Err(UrlValidationError::MissingHttpPrefix);
    }

    if DENYLIST_REGEXES.iter().any(|re| re.is_match(input)) {
        return Err(UrlValidationError::DangerousContent);
    }

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    if input.chars().count() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    Ok(())
}
