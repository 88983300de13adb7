//! Link creation service.

use std::sync::Arc;

use metrics::counter;
use tracing::{info, warn};

use super::CodeAllocator;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for creating shortened links.
///
/// Validation of the long URL happens at the request boundary; by the time a
/// URL reaches this service it is stored exactly as submitted.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `max_attempts` bounds both the allocator's pre-check loop and the
    /// number of inserts tried when the store refuses a code.
    pub fn new(link_repository: Arc<L>, code_length: usize, max_attempts: u32) -> Self {
        let allocator = CodeAllocator::new(link_repository.clone(), code_length, max_attempts);
        Self {
            link_repository,
            allocator,
        }
    }

    pub fn code_length(&self) -> usize {
        self.allocator.code_length()
    }

    /// Creates a short link for `long_url` under a freshly allocated code.
    ///
    /// Two links for the same long URL get two distinct codes.
    ///
    /// # Errors
    ///
    /// - [`AppError::CodeSpaceExhausted`] if every attempt lost to an existing code
    /// - [`AppError::StoreUnavailable`] / [`AppError::Internal`] on store failures
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        let max_attempts = self.allocator.max_attempts();

        for attempt in 1..=max_attempts {
            let short_code = self.allocator.allocate().await?;

            let new_link = NewLink {
                short_code,
                long_url: long_url.clone(),
            };

            match self.link_repository.insert(new_link).await {
                Ok(link) => {
                    counter!("links_created_total").increment(1);
                    info!(
                        link_id = link.id,
                        short_code = %link.short_code,
                        "Link created"
                    );
                    return Ok(link);
                }
                // Another request took the code after our pre-check.
                Err(AppError::DuplicateCode { code }) => {
                    counter!("code_collisions_total").increment(1);
                    warn!(short_code = %code, attempt, "Short code taken concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::CodeSpaceExhausted {
            attempts: max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::persistence::InMemoryLinkRepository;
    use chrono::Utc;
    use std::collections::HashSet;

    fn link_from(new_link: NewLink) -> Link {
        Link::new(
            10,
            new_link.short_code,
            new_link.long_url,
            Utc::now(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|new_link| {
                new_link.long_url == "https://example.com" && new_link.short_code.len() == 4
            })
            .times(1)
            .returning(|new_link| Ok(link_from(new_link)));

        let service = LinkService::new(Arc::new(repo), 4, 10);

        let link = service
            .create_short_link("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.short_code.len(), 4);
    }

    #[tokio::test]
    async fn test_create_short_link_keeps_url_as_submitted() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|new_link| new_link.long_url == "https://EXAMPLE.com:443/Path?q=1")
            .times(1)
            .returning(|new_link| Ok(link_from(new_link)));

        let service = LinkService::new(Arc::new(repo), 4, 10);

        let link = service
            .create_short_link("https://EXAMPLE.com:443/Path?q=1".to_string())
            .await
            .unwrap();

        assert_eq!(link.long_url, "https://EXAMPLE.com:443/Path?q=1");
    }

    #[tokio::test]
    async fn test_create_short_link_retries_on_insert_race() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(2).returning(|_| Ok(None));

        let mut seq = mockall::Sequence::new();
        repo.expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_link| {
                Err(AppError::DuplicateCode {
                    code: new_link.short_code,
                })
            });
        repo.expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_link| Ok(link_from(new_link)));

        let service = LinkService::new(Arc::new(repo), 4, 10);

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_gives_up_after_max_attempts() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(3).returning(|_| Ok(None));
        repo.expect_insert().times(3).returning(|new_link| {
            Err(AppError::DuplicateCode {
                code: new_link.short_code,
            })
        });

        let service = LinkService::new(Arc::new(repo), 4, 3);

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(
            result,
            Err(AppError::CodeSpaceExhausted { attempts: 3 })
        ));
    }

    #[tokio::test]
    async fn test_create_short_link_store_failure() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_insert()
            .times(1)
            .returning(|_| Err(AppError::store_unavailable("pool timed out")));

        let service = LinkService::new(Arc::new(repo), 4, 10);

        let result = service
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(result, Err(AppError::StoreUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_creations_get_distinct_codes() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        // Short codes on purpose so that collisions actually happen.
        let service = Arc::new(LinkService::new(repo.clone(), 2, 50));

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create_short_link(format!("https://example.com/{i}"))
                        .await
                })
            })
            .collect();

        let mut codes = HashSet::new();
        for handle in handles {
            let link = handle.await.unwrap().unwrap();
            assert!(codes.insert(link.short_code));
        }

        assert_eq!(codes.len(), 64);
        assert_eq!(repo.len().await, 64);
    }

    #[tokio::test]
    async fn test_same_url_twice_gets_two_codes() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        let service = LinkService::new(repo, 4, 10);

        let a = service
            .create_short_link("https://example.com".to_string())
            .await
            .unwrap();
        let b = service
            .create_short_link("https://example.com".to_string())
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.short_code, b.short_code);
    }
}
