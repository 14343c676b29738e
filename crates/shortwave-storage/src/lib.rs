//! Storage backends for short links.
//!
//! Both backends implement the repository contract from `shortwave_core`:
//! an in-memory store for tests and local runs, and a Redis store for
//! real deployments.

pub mod memory;
pub mod redis;

pub use memory::InMemoryRepository;
pub use redis::RedisRepository;
pub use shortwave_core::{ReadShortRepository, ShortRepository, StorageError};
