//! repo-fetch - Acquire git repositories and derive raw content links
//!
//! The core of the crate is synchronous and has no network code of its own:
//! [`git`] drives the system `git` binary and [`github`] rewrites URLs. The
//! [`http`] and [`registry`] modules add the async download and registry
//! lookups used by the command line tool.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod github;
pub mod http;
pub mod registry;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, Source};
pub use error::SourceError;
pub use git::{RepositoryDescriptor, clone_repository, current_branch};
pub use github::{to_raw_content_url, validate_github_url};
