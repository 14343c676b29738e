//! Caller-side adapters for the key-issuing service.
//!
//! [`KeygenAllocator`] talks to the remote keygen service over gRPC.
//! [`InMemoryAllocator`] issues sequential keys in-process for tests and
//! local development.

pub mod grpc;
pub mod memory;

pub use grpc::KeygenAllocator;
pub use memory::InMemoryAllocator;
