//! Core types and traits for the Shortwave short-link service.
//!
//! This crate provides the `ShortLink` entity, the contracts for the
//! key-issuing service and the short-link store, and the shared error
//! taxonomy used by the shortener and redirector services.

pub mod allocator;
pub mod error;
pub mod repository;
pub mod short_link;

pub use allocator::KeyAllocator;
pub use error::{AllocationError, StorageError};
pub use repository::{ReadShortRepository, ShortRepository};
pub use short_link::{ShortLink, DEFAULT_EXPIRY_HORIZON};
