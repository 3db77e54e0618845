//! Typed errors for repository acquisition and URL handling
//!
//! Every variant carries the credential-free repository URL. Raw command
//! output is redacted before it is stored, so rendering any of these errors
//! never exposes an access token.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The remote reported that the repository does not exist
    #[error("repository {url} not found")]
    RepoNotFound { url: String, output: String },

    /// The remote rejected the supplied (or missing) credentials
    #[error("authentication failed for repository {url}")]
    AuthenticationFailed { url: String, output: String },

    /// The requested revision does not exist in the cloned repository
    #[error("revision '{revision}' not found in repository {url}")]
    RevisionNotFound {
        url: String,
        revision: String,
        output: String,
    },

    /// The URL could not be parsed
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Any failure that does not match a known signature
    #[error("{context}: {detail}")]
    Generic { context: String, detail: String },
}

impl SourceError {
    pub(crate) fn generic(context: impl Into<String>, detail: impl Into<String>) -> Self {
        SourceError::Generic {
            context: context.into(),
            detail: detail.into(),
        }
    }

    /// The repository URL the error refers to, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            SourceError::RepoNotFound { url, .. }
            | SourceError::AuthenticationFailed { url, .. }
            | SourceError::RevisionNotFound { url, .. }
            | SourceError::InvalidUrl { url, .. } => Some(url),
            SourceError::Generic { .. } => None,
        }
    }

    /// Captured command output kept for diagnostics
    pub fn output(&self) -> Option<&str> {
        match self {
            SourceError::RepoNotFound { output, .. }
            | SourceError::AuthenticationFailed { output, .. }
            | SourceError::RevisionNotFound { output, .. } => Some(output),
            SourceError::Generic { detail, .. } => Some(detail),
            SourceError::InvalidUrl { .. } => None,
        }
    }
}
