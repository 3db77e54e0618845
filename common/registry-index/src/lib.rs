//! Devfile registry index client library
//!
//! This library provides a small interface for reading the sample index
//! published by a devfile registry.
//!
//! ## Modules
//!
//! - [`client`]: Core registry client implementation
//! - [`index`]: Index entry types and the sample index request

mod client;
mod index;

// Re-export public API
pub use client::{DEFAULT_USER_AGENT, RegistryClient};
pub use index::{GitSection, IndexEntry, SAMPLE_INDEX_PATH};
