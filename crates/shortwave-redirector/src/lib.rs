//! Redirection resolution for short links.
//!
//! [`RedirectorService`] resolves a hash to its destination URL through a
//! read-only repository, applying the expiration rule. [`CachedRepository`]
//! is an optional read-side decorator that keeps resolved records in an
//! in-memory cache.

pub mod cached;
pub mod error;
pub mod redirector;
pub mod service;

pub use cached::{CacheSettings, CachedRepository};
pub use error::ResolutionError;
pub use redirector::Redirector;
pub use service::RedirectorService;
