//! GitHub host validation

use crate::constants::github::HOST_MARKER;
use crate::error::{Result, SourceError};
use crate::utils::redact_credentials;
use url::Url;

/// Check that `url` points at a GitHub host
///
/// Any host containing `github` is accepted, which covers `github.com`,
/// its subdomains and GitHub Enterprise instances.
pub fn validate_github_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).map_err(|source| SourceError::InvalidUrl {
        url: redact_credentials(url),
        source,
    })?;

    match parsed.host_str() {
        Some(host) if host.contains(HOST_MARKER) => Ok(()),
        _ => Err(SourceError::generic(
            "source git url is not from github",
            redact_credentials(url),
        )),
    }
}
