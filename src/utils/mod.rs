//! Utility modules for common functionality

pub mod filesystem;
pub mod filters;
pub mod sanitizers;

// Re-export commonly used functions
pub use filesystem::{ensure_directory_exists, ensure_private_directory, path_exists};
pub use filters::{filter_by_names, filter_sources};
pub use sanitizers::{redact_credentials, scrub_token};
