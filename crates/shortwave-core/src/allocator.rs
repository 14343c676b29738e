use crate::error::AllocationError;
use async_trait::async_trait;

/// Contract for the key-issuing service.
///
/// Uniqueness of allocated keys is entirely the implementation's
/// responsibility; callers never coordinate between concurrent
/// allocations.
#[async_trait]
pub trait KeyAllocator: Send + Sync + 'static {
    /// Requests a fresh, globally unique key.
    ///
    /// Fails on transport failure, remote error, or a malformed token.
    /// No retries are performed; the caller decides.
    async fn allocate(&self) -> Result<String, AllocationError>;

    /// Returns a previously allocated, unused key.
    ///
    /// Releasing is a cleanup hint, not a correctness requirement: a key
    /// that is released but never reclaimed is wasted capacity, nothing
    /// more. Callers must not treat a release failure as fatal.
    async fn release(&self, key: &str) -> Result<(), AllocationError>;
}
