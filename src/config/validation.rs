//! Configuration validation utilities
//!
//! Validation collects every problem in a configuration instead of stopping
//! at the first one, so a broken file can be fixed in a single pass.

use super::Source;
use anyhow::anyhow;
use std::collections::HashSet;
use std::path::Path;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Source name is empty
    EmptySourceName(String),
    /// Source URL is empty
    EmptySourceUrl(String),
    /// Source URL format is invalid
    InvalidSourceUrl(String, String),
    /// Duplicate source names found
    DuplicateSourceName(String),
    /// A configured revision is empty or whitespace-only
    EmptyRevision(String),
    /// Tag filter is empty or whitespace-only
    EmptyTagFilter(String),
    /// `http_timeout_secs` is zero, which would fail every request
    ZeroHttpTimeout,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptySourceName(url) => {
                write!(f, "Source name cannot be empty (url: '{}')", url)
            }
            ValidationError::EmptySourceUrl(name) => {
                write!(f, "Source '{}' URL cannot be empty", name)
            }
            ValidationError::InvalidSourceUrl(name, url) => {
                write!(f, "Source '{}' has invalid URL: '{}'", name, url)
            }
            ValidationError::DuplicateSourceName(name) => {
                write!(f, "Duplicate source name: '{}'", name)
            }
            ValidationError::EmptyRevision(name) => {
                write!(f, "Source '{}' has an empty revision", name)
            }
            ValidationError::EmptyTagFilter(filter) => {
                write!(f, "Tag filter cannot be empty: '{}'", filter)
            }
            ValidationError::ZeroHttpTimeout => {
                write!(f, "http_timeout_secs must be greater than zero")
            }
        }
    }
}

/// Validates a list of sources
///
/// Checks for duplicate names and validates each individual source.
pub fn validate_sources(sources: &[Source]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for source in sources {
        if !names.insert(&source.name) {
            errors.push(ValidationError::DuplicateSourceName(source.name.clone()));
        }
    }

    for source in sources {
        if let Err(mut source_errors) = validate_source(source) {
            errors.append(&mut source_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single source
pub fn validate_source(source: &Source) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if source.name.trim().is_empty() {
        errors.push(ValidationError::EmptySourceName(source.url.clone()));
    }

    if source.url.is_empty() {
        errors.push(ValidationError::EmptySourceUrl(source.name.clone()));
    } else if !is_valid_source_url(&source.url) {
        errors.push(ValidationError::InvalidSourceUrl(
            source.name.clone(),
            crate::utils::redact_credentials(&source.url),
        ));
    }

    if let Some(revision) = &source.revision
        && revision.trim().is_empty()
    {
        errors.push(ValidationError::EmptyRevision(source.name.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a tag filter string
pub fn validate_tag_filter(filter: &str) -> Result<(), ValidationError> {
    if filter.trim().is_empty() {
        Err(ValidationError::EmptyTagFilter(filter.to_string()))
    } else {
        Ok(())
    }
}

/// Validates the configured HTTP timeout, if any
pub fn validate_http_timeout(timeout_secs: Option<u64>) -> Result<(), ValidationError> {
    match timeout_secs {
        Some(0) => Err(ValidationError::ZeroHttpTimeout),
        _ => Ok(()),
    }
}

/// Accepts the URL forms git can clone from
fn is_valid_source_url(url: &str) -> bool {
    url.starts_with("git@")
        || url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("file://")
        || Path::new(url).is_absolute()
}

/// Converts validation errors to a user-friendly anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Configuration is invalid:\n  - {}", messages.join("\n  - "))
}
