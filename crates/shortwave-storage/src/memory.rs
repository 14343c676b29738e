use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use shortwave_core::{ReadShortRepository, ShortLink, ShortRepository, StorageError};
use std::sync::Arc;

/// In-memory implementation of the repository contract.
///
/// Clones share the same underlying map, so a repository can be handed to
/// both the shortener and the redirector.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    links: Arc<DashMap<String, ShortLink>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReadShortRepository for InMemoryRepository {
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShortLink>, StorageError> {
        Ok(self.links.get(hash).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl ShortRepository for InMemoryRepository {
    async fn insert(&self, link: ShortLink) -> Result<ShortLink, StorageError> {
        match self.links.entry(link.hash.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(link.hash)),
            Entry::Vacant(slot) => {
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<ShortLink>, StorageError> {
        Ok(self
            .links
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{SignedDuration, Timestamp};

    fn link(hash: &str, owner_id: &str) -> ShortLink {
        ShortLink {
            hash: hash.to_string(),
            original_url: format!("https://example.com/{hash}"),
            owner_id: owner_id.to_string(),
            expires_at: Some(Timestamp::now() + SignedDuration::from_hours(1)),
        }
    }

    #[tokio::test]
    async fn insert_then_find() {
        let repo = InMemoryRepository::new();

        let stored = repo.insert(link("abc123", "user-1")).await.unwrap();
        assert_eq!(stored.hash, "abc123");

        let found = repo.find_by_hash("abc123").await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn find_unknown_hash_is_none() {
        let repo = InMemoryRepository::new();

        let found = repo.find_by_hash("missing").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn duplicate_hash_is_a_conflict() {
        let repo = InMemoryRepository::new();

        repo.insert(link("abc123", "user-1")).await.unwrap();
        let err = repo.insert(link("abc123", "user-2")).await.unwrap_err();

        assert!(matches!(err, StorageError::Conflict(hash) if hash == "abc123"));
    }

    #[tokio::test]
    async fn list_is_scoped_to_the_owner() {
        let repo = InMemoryRepository::new();

        repo.insert(link("aaa111", "user-1")).await.unwrap();
        repo.insert(link("bbb222", "user-1")).await.unwrap();
        repo.insert(link("ccc333", "user-2")).await.unwrap();

        let mut hashes: Vec<String> = repo
            .list("user-1")
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.hash)
            .collect();
        hashes.sort();

        assert_eq!(hashes, vec!["aaa111", "bbb222"]);
    }

    #[tokio::test]
    async fn list_without_links_is_empty() {
        let repo = InMemoryRepository::new();

        let links = repo.list("user-1").await.unwrap();
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = InMemoryRepository::new();
        let view = repo.clone();

        repo.insert(link("abc123", "user-1")).await.unwrap();

        assert!(view.find_by_hash("abc123").await.unwrap().is_some());
    }
}
