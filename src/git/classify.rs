//! Classification of git command output
//!
//! Git reports most failures only as human-readable text, so failures are
//! recognized by matching known English message fragments. These fragments
//! change between git versions and locales; a miss degrades to a generic
//! error rather than a wrong classification. The signature table is owned by
//! [`OutputClassifier`] so it can be replaced or extended without touching
//! the acquisition code.

use regex::Regex;
use std::sync::LazyLock;

/// Failure categories recognized in git output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RepoNotFound,
    AuthenticationFailed,
    RevisionNotFound,
}

pub const REPO_NOT_FOUND_PATTERN: &str = "repository .* not found";
pub const AUTHENTICATION_FAILED_PATTERN: &str = "Authentication failed .*";
pub const REVISION_NOT_FOUND_PATTERN: &str =
    r"pathspec .* did not match any file\(s\) known to git";

static DEFAULT_CLASSIFIER: LazyLock<OutputClassifier> = LazyLock::new(OutputClassifier::default);

/// The built-in classifier, compiled once per process
pub fn default_classifier() -> &'static OutputClassifier {
    &DEFAULT_CLASSIFIER
}

/// Ordered table of failure signatures
#[derive(Debug, Clone)]
pub struct OutputClassifier {
    signatures: Vec<(FailureKind, Regex)>,
}

impl OutputClassifier {
    /// Create a classifier from an explicit signature table
    pub fn new(signatures: Vec<(FailureKind, Regex)>) -> Self {
        Self { signatures }
    }

    /// Append a signature, checked after all existing ones
    pub fn with_signature(mut self, kind: FailureKind, pattern: &str) -> Result<Self, regex::Error> {
        self.signatures.push((kind, Regex::new(pattern)?));
        Ok(self)
    }

    /// Return the first category whose signature matches `output`
    pub fn classify(&self, output: &str) -> Option<FailureKind> {
        self.signatures
            .iter()
            .find(|(_, pattern)| pattern.is_match(output))
            .map(|(kind, _)| *kind)
    }

    /// Whether `output` matches the signature table as `kind`
    pub fn is(&self, output: &str, kind: FailureKind) -> bool {
        self.classify(output) == Some(kind)
    }
}

impl Default for OutputClassifier {
    fn default() -> Self {
        let table = [
            (FailureKind::RepoNotFound, REPO_NOT_FOUND_PATTERN),
            (FailureKind::AuthenticationFailed, AUTHENTICATION_FAILED_PATTERN),
            (FailureKind::RevisionNotFound, REVISION_NOT_FOUND_PATTERN),
        ];
        Self::new(
            table
                .into_iter()
                .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("valid built-in pattern")))
                .collect(),
        )
    }
}
