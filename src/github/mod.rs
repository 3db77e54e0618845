//! GitHub URL handling
//!
//! GitHub serves browse pages (`github.com/<owner>/<repo>/tree/<ref>/...`)
//! and raw file contents (`raw.githubusercontent.com/<owner>/<repo>/<ref>/...`)
//! from different hosts with different path layouts. This module converts
//! between the two without any network access.
//!
//! - [`raw`]: Browse URL to raw content URL conversion and context helpers
//! - [`validate`]: Host check for GitHub URLs
//!
//! ```rust
//! use repo_fetch::github::to_raw_content_url;
//!
//! let raw = to_raw_content_url("https://github.com/org/repo.git", "v1.2", "src").unwrap();
//! assert_eq!(raw, "https://raw.githubusercontent.com/org/repo/v1.2/src");
//! ```

pub mod raw;
pub mod validate;

pub use raw::{context_from_depth, resolve_git_link, to_raw_content_url};
pub use validate::validate_github_url;
