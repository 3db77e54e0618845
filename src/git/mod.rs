//! Git operations using system git commands for maximum compatibility
//!
//! This module is organized into sub-modules:
//!
//! ## Sub-modules
//!
//! - [`clone`]: Repository acquisition
//!   - `clone_repository()` - Clone a repository and check out a revision
//!   - `credentialed_url()` - Embed an access token into a clone URL
//!
//! - [`classify`]: Failure signatures for git output
//!   - `OutputClassifier` - Ordered, replaceable signature table
//!
//! - [`branch`]: Introspection of cloned repositories
//!   - `current_branch()` - Abbreviated name of the checked out ref
//!
//! - [`descriptor`]: `RepositoryDescriptor`, the input of every acquisition
//!
//! - [`common`]: Shared utilities and helpers
//!   - `Logger` - Consistent logging for git operations

pub mod branch;
pub mod classify;
pub mod clone;
pub mod common;
pub mod descriptor;

pub use branch::current_branch;
pub use classify::{FailureKind, OutputClassifier, default_classifier};
pub use clone::{Acquirer, clone_repository, credentialed_url};
pub use common::Logger;
pub use descriptor::RepositoryDescriptor;
