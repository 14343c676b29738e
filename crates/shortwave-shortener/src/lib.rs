//! Short-link creation service.
//!
//! This crate implements the creation saga: validate the request,
//! allocate a hash from the key service, persist the record, and release
//! the hash if persistence fails. Core types and contracts are
//! re-exported from `shortwave_core`.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::{CreationError, ValidationError};
pub use service::{CreateParams, ShortLinkService};
pub use shortener::ShortLinks;
