//! Short-code resolution with click recording.

use std::sync::Arc;

use metrics::counter;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::Click;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Where a resolved redirect's click goes.
#[derive(Debug, Clone)]
pub enum ClickRecording {
    /// Appended before the redirect is answered.
    Inline,
    /// Handed to [`crate::domain::click_worker::run_click_worker`].
    Queued(mpsc::Sender<ClickEvent>),
}

pub struct RedirectService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
    recording: ClickRecording,
}

impl<L: LinkRepository + ?Sized> RedirectService<L> {
    pub fn new(link_repository: Arc<L>, recording: ClickRecording) -> Self {
        Self {
            link_repository,
            recording,
        }
    }

    /// Resolves `code` to its long URL and records one click.
    ///
    /// Unknown codes return [`AppError::NotFound`] without recording anything.
    ///
    /// In inline mode a failed append fails the call, so a returned URL means
    /// the click is stored. In queued mode the click is only enqueued; a full
    /// or closed queue drops it with a warning and the redirect still succeeds.
    pub async fn resolve_and_record(&self, code: &str, click: Click) -> Result<String, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("link not found"))?;

        match &self.recording {
            ClickRecording::Inline => {
                self.link_repository.append_click(link.id, click).await?;
                counter!("clicks_recorded_total").increment(1);
                debug!(short_code = %code, "Click recorded");
            }
            ClickRecording::Queued(click_tx) => {
                let event = ClickEvent::new(link.id, code, click);
                match click_tx.try_send(event) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        counter!("clicks_dropped_total").increment(1);
                        warn!(short_code = %code, "Click queue full, click dropped");
                    }
                    Err(TrySendError::Closed(_)) => {
                        counter!("clicks_dropped_total").increment(1);
                        warn!(short_code = %code, "Click queue closed, click dropped");
                    }
                }
            }
        }

        Ok(link.long_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Link, NewLink};
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::persistence::InMemoryLinkRepository;
    use chrono::Utc;

    fn test_link(id: i64, code: &str) -> Link {
        Link::new(
            id,
            code.to_string(),
            "https://example.com/target".to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    fn click() -> Click {
        Click::new(Some("test-agent".to_string()), "203.0.113.7".to_string())
    }

    #[tokio::test]
    async fn test_inline_resolves_and_appends() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .withf(|code| code == "aB3x")
            .times(1)
            .returning(|code| Ok(Some(test_link(7, code))));
        repo.expect_append_click()
            .withf(|link_id, click| *link_id == 7 && click.ip_address == "203.0.113.7")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = RedirectService::new(Arc::new(repo), ClickRecording::Inline);

        let url = service.resolve_and_record("aB3x", click()).await.unwrap();

        assert_eq!(url, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_unknown_code_records_nothing() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));
        repo.expect_append_click().times(0);

        let service = RedirectService::new(Arc::new(repo), ClickRecording::Inline);

        let result = service.resolve_and_record("nope", click()).await;

        assert!(matches!(result, Err(AppError::NotFound { ref message }) if message == "link not found"));
    }

    #[tokio::test]
    async fn test_inline_append_failure_fails_request() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .returning(|code| Ok(Some(test_link(1, code))));
        repo.expect_append_click()
            .times(1)
            .returning(|_, _| Err(AppError::store_unavailable("connection reset")));

        let service = RedirectService::new(Arc::new(repo), ClickRecording::Inline);

        let result = service.resolve_and_record("aB3x", click()).await;

        assert!(matches!(result, Err(AppError::StoreUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_queued_sends_event_without_appending() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .returning(|code| Ok(Some(test_link(3, code))));
        repo.expect_append_click().times(0);

        let (tx, mut rx) = mpsc::channel(4);
        let service = RedirectService::new(Arc::new(repo), ClickRecording::Queued(tx));

        let url = service.resolve_and_record("qQ1z", click()).await.unwrap();

        assert_eq!(url, "https://example.com/target");
        let event = rx.recv().await.unwrap();
        assert_eq!(event.link_id, 3);
        assert_eq!(event.short_code, "qQ1z");
        assert_eq!(event.click.user_agent.as_deref(), Some("test-agent"));
    }

    #[tokio::test]
    async fn test_queued_full_queue_still_redirects() {
        let mut repo = MockLinkRepository::new();
        repo.expect_find_by_code()
            .returning(|code| Ok(Some(test_link(3, code))));

        let (tx, _rx) = mpsc::channel(1);
        let service = RedirectService::new(Arc::new(repo), ClickRecording::Queued(tx));

        assert!(service.resolve_and_record("qQ1z", click()).await.is_ok());
        assert!(service.resolve_and_record("qQ1z", click()).await.is_ok());
    }

    #[tokio::test]
    async fn test_sequential_clicks_recorded_in_order() {
        let repo = Arc::new(InMemoryLinkRepository::new());
        let link = repo
            .insert(NewLink {
                short_code: "ordr".to_string(),
                long_url: "https://example.com".to_string(),
            })
            .await
            .unwrap();

        let service = RedirectService::new(repo.clone(), ClickRecording::Inline);

        for i in 0..5 {
            service
                .resolve_and_record("ordr", Click::new(None, format!("10.0.0.{i}")))
                .await
                .unwrap();
        }

        let ips: Vec<_> = repo
            .list_clicks(link.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.ip_address)
            .collect();
        assert_eq!(
            ips,
            vec!["10.0.0.0", "10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"]
        );
    }
}
