//! Short code generation and validation utilities.
//!
//! Codes are drawn from the 62-character alphanumeric alphabet using the
//! thread-local `rand` generator, which is seeded from the operating system.

use crate::error::AppError;
use rand::Rng;

/// Characters a short code may contain.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random short code of exactly `length` characters.
///
/// Every position is drawn uniformly and independently from [`ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(4);
/// assert_eq!(code.len(), 4);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Number of distinct codes of the given length (`62^length`), saturating.
pub fn code_space_size(length: usize) -> u128 {
    (ALPHABET.len() as u128).saturating_pow(length as u32)
}

/// Validates a short code taken from a request path.
///
/// # Rules
///
/// - Length: exactly `length` characters
/// - Allowed characters: `A-Z`, `a-z`, `0-9`
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every rule the code violates.
pub fn validate_short_code(code: &str, length: usize) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if code.chars().count() != length {
        errors.push(format!("short_code must be {length} characters long"));
    }

    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.push(
            "short_code can only contain letters (A-Z, a-z) and numbers (0-9)".to_string(),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::bad_request("Invalid input data", errors))
    }
}
