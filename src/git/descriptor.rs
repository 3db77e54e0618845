//! Description of a repository to acquire

use crate::utils::{redact_credentials, scrub_token};
use std::fmt;

/// What to clone, which revision to check out and how to authenticate
///
/// Empty revision or token strings are treated as absent. The access token
/// never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    source_url: String,
    revision: Option<String>,
    access_token: Option<String>,
}

impl RepositoryDescriptor {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            revision: None,
            access_token: None,
        }
    }

    /// Check out this branch, tag or commit after cloning
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into()).filter(|r| !r.is_empty());
        self
    }

    /// Authenticate the clone with this token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into()).filter(|t| !t.is_empty());
        self
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Source URL safe to print or embed in errors
    pub fn display_url(&self) -> String {
        redact_credentials(&self.source_url)
    }

    /// Remove the access token and URL credentials from command output
    pub(crate) fn scrub(&self, text: &str) -> String {
        scrub_token(text, self.access_token())
    }
}

impl fmt::Debug for RepositoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryDescriptor")
            .field("source_url", &self.display_url())
            .field("revision", &self.revision)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
