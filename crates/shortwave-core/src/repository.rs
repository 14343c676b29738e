use crate::error::StorageError;
use crate::short_link::ShortLink;
use async_trait::async_trait;

/// A read-only view of a short-link repository.
///
/// This trait provides only the lookup operation from [`ShortRepository`],
/// giving the redirector read-only access to the store.
#[async_trait]
pub trait ReadShortRepository: Send + Sync + 'static {
    /// Retrieves the short link for a given hash.
    /// Returns `None` if no record exists for the hash.
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShortLink>, StorageError>;
}

#[async_trait]
pub trait ShortRepository: ReadShortRepository {
    /// Persists a fully formed short link and returns it unchanged.
    ///
    /// Fails with [`StorageError::Conflict`] if a record with the same
    /// hash already exists.
    async fn insert(&self, link: ShortLink) -> Result<ShortLink, StorageError>;

    /// Returns every short link owned by the given principal.
    ///
    /// Order is not guaranteed. An owner with no links yields an empty
    /// vec, not an error.
    async fn list(&self, owner_id: &str) -> Result<Vec<ShortLink>, StorageError>;
}
