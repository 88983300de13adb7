//! Short-code allocation with an existence pre-check.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, warn};

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Picks candidate codes that are not yet in the store.
///
/// The lookup is only a filter: another request may take the same code
/// between the check and the insert. The store's uniqueness constraint has
/// the final word and [`super::LinkService`] retries when it refuses a code.
pub struct CodeAllocator<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    code_length: usize,
    max_attempts: u32,
}

impl<L: LinkRepository + ?Sized> CodeAllocator<L> {
    pub fn new(repository: Arc<L>, code_length: usize, max_attempts: u32) -> Self {
        Self {
            repository,
            code_length,
            max_attempts,
        }
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns a code that was free at the time of the check.
    ///
    /// # Errors
    ///
    /// - [`AppError::CodeSpaceExhausted`] after `max_attempts` taken candidates
    /// - any store error from the lookup, unchanged
    pub async fn allocate(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code(self.code_length);

            if self.repository.find_by_code(&code).await?.is_none() {
                debug!(attempt, "Short code allocated");
                return Ok(code);
            }

            counter!("code_collisions_total").increment(1);
            debug!(attempt, "Short code already taken, retrying");
        }

        warn!(
            attempts = self.max_attempts,
            code_length = self.code_length,
            "No free short code found"
        );

        Err(AppError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}
