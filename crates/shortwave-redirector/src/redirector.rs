use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a hash to its destination URL.
    /// Returns `None` if the hash is unknown or the link has expired.
    async fn resolve(&self, hash: &str) -> Result<Option<String>>;
}
