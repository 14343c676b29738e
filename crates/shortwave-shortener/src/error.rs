use shortwave_core::{AllocationError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CreationError>;

/// Input failures detected before any remote call is made.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("owner id must not be empty")]
    MissingOwner,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// Failures of the create saga.
///
/// The variants identify which step failed: validation made no external
/// calls, a key service failure left nothing persisted, and a short
/// service failure means a key was allocated and a release was attempted.
/// The wrapped cause is always the step's own error; a failed compensating
/// release never replaces it.
#[derive(Debug, Clone, Error)]
pub enum CreationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to create short link: key service failed: {0}")]
    KeyService(#[source] AllocationError),
    #[error("failed to create short link: short service failed: {0}")]
    ShortService(#[source] StorageError),
}
