use crate::error::{CreationError, ValidationError};
use crate::shortener::ShortLinks;
use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use shortwave_core::{
    KeyAllocator, ShortLink, ShortRepository, StorageError, DEFAULT_EXPIRY_HORIZON,
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Parameters for creating a short link.
#[derive(Debug, Clone)]
pub struct CreateParams {
    /// The URL the short link redirects to.
    pub original_url: String,
    /// The principal creating the link.
    pub owner_id: String,
}

/// A concrete implementation of the [`ShortLinks`] contract.
///
/// Creation runs as a two-step saga across the key service and the
/// repository: allocate a hash, then persist the record. When persistence
/// fails, the allocated hash is released back to the key service on a
/// best-effort basis, so the only durable outcome of a failed create is a
/// possibly wasted key, never a half-written record.
///
/// Note: the key service is responsible for global uniqueness of the
/// allocated hashes. No collision retry is performed; a duplicate hash is
/// surfaced as a storage conflict.
#[derive(Debug, Clone)]
pub struct ShortLinkService<A, R> {
    allocator: Arc<A>,
    repository: Arc<R>,
    expiry_horizon: SignedDuration,
}

impl<A: KeyAllocator, R: ShortRepository> ShortLinkService<A, R> {
    /// Creates a service with the default one-year expiry horizon.
    pub fn new(allocator: A, repository: R) -> Self {
        Self::with_expiry_horizon(allocator, repository, DEFAULT_EXPIRY_HORIZON)
    }

    /// Creates a service with a custom expiry horizon.
    pub fn with_expiry_horizon(
        allocator: A,
        repository: R,
        expiry_horizon: SignedDuration,
    ) -> Self {
        Self {
            allocator: Arc::new(allocator),
            repository: Arc::new(repository),
            expiry_horizon,
        }
    }

    /// Creates a short link for the given URL and owner.
    pub async fn create(&self, params: CreateParams) -> Result<ShortLink, CreationError> {
        ShortLinks::create(self, params).await
    }

    /// Lists every short link owned by the given principal.
    pub async fn list(&self, owner_id: &str) -> Result<Vec<ShortLink>, StorageError> {
        ShortLinks::list(self, owner_id).await
    }

    fn validate(params: &CreateParams) -> Result<(), ValidationError> {
        if params.owner_id.is_empty() {
            return Err(ValidationError::MissingOwner);
        }
        validate_url(&params.original_url)
    }
}

/// Validates that the URL is absolute with an http(s) scheme and a host.
fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::InvalidUrl("url cannot be empty".to_string()));
    }

    let Some((scheme, rest)) = url.split_once("://") else {
        return Err(ValidationError::InvalidUrl(format!(
            "url must have a scheme and host: {url}"
        )));
    };

    if scheme.is_empty() || rest.is_empty() {
        return Err(ValidationError::InvalidUrl(format!(
            "url must have a scheme and host: {url}"
        )));
    }

    let scheme = scheme.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(ValidationError::InvalidUrl(format!(
            "url scheme must be http or https: {scheme}"
        )));
    }

    Ok(())
}

#[async_trait]
impl<A: KeyAllocator, R: ShortRepository> ShortLinks for ShortLinkService<A, R> {
    async fn create(&self, params: CreateParams) -> Result<ShortLink, CreationError> {
        // Fail fast on bad input; no remote call has happened yet.
        Self::validate(&params)?;

        let hash = self
            .allocator
            .allocate()
            .await
            .map_err(CreationError::KeyService)?;
        trace!(hash = %hash, "allocated hash for new short link");

        let link = ShortLink {
            hash: hash.clone(),
            original_url: params.original_url,
            owner_id: params.owner_id,
            expires_at: Some(Timestamp::now() + self.expiry_horizon),
        };

        match self.repository.insert(link).await {
            Ok(stored) => {
                debug!(hash = %stored.hash, owner_id = %stored.owner_id, "created short link");
                Ok(stored)
            }
            Err(err) => {
                // Compensate: hand the unused hash back, once. The release
                // outcome is observed only here; the caller always sees the
                // persist error.
                if let Err(release_err) = self.allocator.release(&hash).await {
                    warn!(
                        hash = %hash,
                        error = %release_err,
                        "failed to release hash after persist failure"
                    );
                }

                Err(CreationError::ShortService(err))
            }
        }
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<ShortLink>, StorageError> {
        trace!(owner_id = %owner_id, "listing short links");
        self.repository.list(owner_id).await
    }
}
