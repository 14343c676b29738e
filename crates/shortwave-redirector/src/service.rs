use std::sync::Arc;

use crate::error::ResolutionError;
use crate::redirector::Redirector;
use async_trait::async_trait;
use shortwave_core::ReadShortRepository;
use tracing::{debug, trace};

/// Service for resolving short-link redirections.
///
/// Uses a read-only repository to fetch records and applies the
/// expiration rule before handing out a destination.
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R: ReadShortRepository> RedirectorService<R> {
    /// Creates a new RedirectorService with the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Resolves a hash to its destination URL.
    ///
    /// * `Ok(Some(url))` - The destination if the link exists and is live
    /// * `Ok(None)` - If the hash is unknown or the link has expired
    /// * `Err(e)` - If the repository lookup itself failed
    pub async fn resolve(&self, hash: &str) -> crate::error::Result<Option<String>> {
        Redirector::resolve(self, hash).await
    }
}

#[async_trait]
impl<R: ReadShortRepository> Redirector for RedirectorService<R> {
    async fn resolve(&self, hash: &str) -> crate::error::Result<Option<String>> {
        trace!(hash = %hash, "resolving short link");

        match self
            .repository
            .find_by_hash(hash)
            .await
            .map_err(ResolutionError::from)?
        {
            Some(link) => {
                // An expired link answers exactly like an unknown one, so a
                // probe cannot learn that a hash was once live. Links with
                // no recorded expiry count as expired.
                if link.is_expired() {
                    debug!(hash = %hash, "short link has expired");
                    return Ok(None);
                }

                debug!(hash = %hash, url = %link.original_url, "resolved short link");
                Ok(Some(link.original_url))
            }
            None => {
                trace!(hash = %hash, "short link not found");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jiff::{SignedDuration, Timestamp};
    use shortwave_core::{ShortLink, ShortRepository, StorageError};
    use shortwave_storage::InMemoryRepository;

    fn link(hash: &str, expires_at: Option<Timestamp>) -> ShortLink {
        ShortLink {
            hash: hash.to_string(),
            original_url: "https://example.com".to_string(),
            owner_id: "user-1".to_string(),
            expires_at,
        }
    }

    async fn service_with(link: ShortLink) -> RedirectorService<InMemoryRepository> {
        let repo = InMemoryRepository::new();
        repo.insert(link).await.unwrap();
        RedirectorService::new(repo)
    }

    #[tokio::test]
    async fn resolves_a_live_link() {
        let expires_at = Timestamp::now() + SignedDuration::from_hours(1);
        let service = service_with(link("abc123", Some(expires_at))).await;

        let url = service.resolve("abc123").await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn unknown_hash_has_no_destination() {
        let service = RedirectorService::new(InMemoryRepository::new());

        let url = service.resolve("missing").await.unwrap();
        assert!(url.is_none());
    }

    #[tokio::test]
    async fn expired_link_has_no_destination() {
        let expired = Timestamp::now() - SignedDuration::from_secs(1);
        let service = service_with(link("abc123", Some(expired))).await;

        let url = service.resolve("abc123").await.unwrap();
        assert!(url.is_none());
    }

    #[tokio::test]
    async fn link_without_expiry_has_no_destination() {
        let service = service_with(link("abc123", None)).await;

        let url = service.resolve("abc123").await.unwrap();
        assert!(url.is_none());
    }

    #[tokio::test]
    async fn expired_and_unknown_answers_are_identical() {
        let expired = Timestamp::now() - SignedDuration::from_secs(1);
        let service = service_with(link("abc123", Some(expired))).await;

        let expired_answer = service.resolve("abc123").await.unwrap();
        let unknown_answer = service.resolve("missing").await.unwrap();
        assert_eq!(expired_answer, unknown_answer);
    }

    struct BrokenRepository;

    #[async_trait]
    impl shortwave_core::ReadShortRepository for BrokenRepository {
        async fn find_by_hash(&self, _hash: &str) -> Result<Option<ShortLink>, StorageError> {
            Err(StorageError::Unavailable("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn repository_failure_is_a_resolution_error() {
        let service = RedirectorService::new(BrokenRepository);

        let err = service.resolve("abc123").await.unwrap_err();
        assert!(matches!(
            err,
            ResolutionError::Storage(StorageError::Unavailable(_))
        ));
    }
}
