use crate::error::Result;
use crate::service::CreateParams;
use async_trait::async_trait;
use shortwave_core::{ShortLink, StorageError};

/// The upstream consumer contract for short-link management.
///
/// This is what the transport layer (HTTP, gRPC) programs against; the
/// matching read path lives in the redirector crate.
#[async_trait]
pub trait ShortLinks: Send + Sync + 'static {
    /// Creates a short link for the given URL and owner.
    async fn create(&self, params: CreateParams) -> Result<ShortLink>;

    /// Lists every short link owned by the given principal.
    async fn list(&self, owner_id: &str) -> std::result::Result<Vec<ShortLink>, StorageError>;
}
