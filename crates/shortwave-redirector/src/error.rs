use shortwave_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolutionError>;

/// Infrastructure failures during redirection lookup.
///
/// An unknown or expired hash is not an error; the resolver reports it as
/// an absent destination. This error only carries repository failures.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    #[error("failed to find a redirection url: {0}")]
    Storage(#[from] StorageError),
}
