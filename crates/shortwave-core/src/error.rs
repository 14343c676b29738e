use thiserror::Error;

/// Errors raised while requesting or returning keys at the key-issuing
/// service.
///
/// Allocation performs no retries; classifying the failure is left to the
/// caller, which decides whether anything needs to be compensated.
#[derive(Debug, Clone, Error)]
pub enum AllocationError {
    #[error("key service unavailable: {0}")]
    Unavailable(String),
    #[error("key service rejected the request: {0}")]
    Remote(String),
    #[error("allocated key is malformed: {0}")]
    MalformedKey(String),
}

/// Errors raised by a short-link repository backend.
///
/// Absence of a record is never an error; `find_by_hash` reports it as
/// `Ok(None)`. A `Conflict` on insert means the key service issued a
/// duplicate hash, which is a breach of its uniqueness contract.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short link already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
