//! Git clone and revision checkout
//!
//! This module handles acquiring a remote repository onto local disk:
//! preparing the target directory, cloning with optional token
//! authentication, checking out a requested revision and turning git's
//! failure output into [`SourceError`] variants.
//!
//! ## Functions
//!
//! - [`clone_repository`]: Acquire a repository with the built-in classifier
//! - [`Acquirer::acquire`]: Acquire a repository with a custom classifier
//! - [`credentialed_url`]: Embed an access token into an `https://` URL
//!
//! Acquisition is not idempotent: cloning into a target that already holds
//! a repository fails the way `git clone` does. Callers that want to
//! re-acquire must clean the target themselves.

use super::classify::{FailureKind, OutputClassifier, default_classifier};
use super::common::{Logger, combined_output};
use super::descriptor::RepositoryDescriptor;
use crate::constants;
use crate::error::{Result, SourceError};
use crate::utils::{ensure_private_directory, path_exists, redact_credentials};
use std::path::Path;
use std::process::{Command, Stdio};

/// Clone a repository into `target` and check out its revision, if any
pub fn clone_repository(target: &Path, descriptor: &RepositoryDescriptor) -> Result<()> {
    Acquirer::default().acquire(target, descriptor)
}

/// Build the URL handed to `git clone`
///
/// Without a token the URL is returned as is. With a token the URL must use
/// the `https://` scheme and becomes `https://token:<token>@<host>/<path>`.
/// The result may contain a secret and must only ever be passed to git.
pub fn credentialed_url(source_url: &str, token: Option<&str>) -> Result<String> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Ok(source_url.to_string());
    };

    match source_url.strip_prefix("https://") {
        Some(rest) => Ok(format!(
            "https://{}:{}@{}",
            constants::git::TOKEN_USER,
            token,
            rest
        )),
        None => Err(SourceError::generic(
            "token authentication requires an https:// repository URL",
            redact_credentials(source_url),
        )),
    }
}

/// Clones repositories and classifies their failures
pub struct Acquirer<'c> {
    classifier: &'c OutputClassifier,
    logger: Logger,
}

impl Default for Acquirer<'static> {
    fn default() -> Self {
        Self::new(default_classifier())
    }
}

impl<'c> Acquirer<'c> {
    pub fn new(classifier: &'c OutputClassifier) -> Self {
        Self {
            classifier,
            logger: Logger,
        }
    }

    /// Clone `descriptor` into `target`, then check out its revision
    ///
    /// A missing target is created (with parents) without world access.
    /// Failure to create it is logged, and the acquisition then fails with
    /// an error naming the unusable target before git is started.
    pub fn acquire(&self, target: &Path, descriptor: &RepositoryDescriptor) -> Result<()> {
        let label = descriptor.display_url();

        if !matches!(path_exists(target), Ok(true))
            && let Err(err) = ensure_private_directory(target)
        {
            self.logger.warn(
                &label,
                &format!("Could not create {}: {}", target.display(), err),
            );
        }

        // git runs inside the target, so a relative target would nest.
        let target = std::path::absolute(target).map_err(|err| {
            SourceError::generic(
                format!("failed to resolve clone target {}", target.display()),
                err.to_string(),
            )
        })?;

        if !target.is_dir() {
            let err = SourceError::generic(
                format!("clone target {} is not a usable directory", target.display()),
                "it could not be created or is not a directory",
            );
            self.logger.error(&label, &err.to_string());
            return Err(err);
        }

        let clone_url = credentialed_url(descriptor.source_url(), descriptor.access_token())?;

        match descriptor.revision() {
            Some(revision) => self.logger.info(
                &label,
                &format!("Cloning revision '{}' into {}", revision, target.display()),
            ),
            None => self.logger.info(
                &label,
                &format!("Cloning default branch into {}", target.display()),
            ),
        }

        let output = Command::new("git")
            .arg("clone")
            .arg(&clone_url)
            .arg(&target)
            .current_dir(&target)
            .envs([constants::git::TERMINAL_PROMPT_ENV, constants::git::ASKPASS_ENV])
            .stdin(Stdio::null())
            .output()
            .map_err(|err| SourceError::generic("failed to execute git clone", err.to_string()))?;

        let clone_output = descriptor.scrub(&combined_output(&output));

        if !output.status.success() {
            let err = match self.classifier.classify(&clone_output) {
                Some(FailureKind::RepoNotFound) => SourceError::RepoNotFound {
                    url: label,
                    output: clone_output,
                },
                Some(FailureKind::AuthenticationFailed) => SourceError::AuthenticationFailed {
                    url: label,
                    output: clone_output,
                },
                _ => SourceError::generic("failed to clone the repo", clone_output),
            };
            self.logger.error(&descriptor.display_url(), &err.to_string());
            return Err(err);
        }

        if let Some(revision) = descriptor.revision() {
            self.checkout(&target, descriptor, revision, &clone_output)?;
        }

        self.logger.success(&label, "Successfully cloned");
        Ok(())
    }

    /// Check out `revision` inside an already cloned repository
    ///
    /// Both the checkout output and the preceding clone output are searched
    /// for the "pathspec did not match" signature.
    fn checkout(
        &self,
        target: &Path,
        descriptor: &RepositoryDescriptor,
        revision: &str,
        clone_output: &str,
    ) -> Result<()> {
        let output = Command::new("git")
            .arg("checkout")
            .arg(revision)
            .current_dir(target)
            .stdin(Stdio::null())
            .output()
            .map_err(|err| {
                SourceError::generic("failed to execute git checkout", err.to_string())
            })?;

        if output.status.success() {
            return Ok(());
        }

        let checkout_output = descriptor.scrub(&combined_output(&output));
        let revision_missing = self
            .classifier
            .is(&checkout_output, FailureKind::RevisionNotFound)
            || self.classifier.is(clone_output, FailureKind::RevisionNotFound);

        let err = if revision_missing {
            SourceError::RevisionNotFound {
                url: descriptor.display_url(),
                revision: revision.to_string(),
                output: checkout_output,
            }
        } else {
            SourceError::generic(
                format!("failed to checkout the revision '{}'", revision),
                checkout_output,
            )
        };
        self.logger.error(&descriptor.display_url(), &err.to_string());
        Err(err)
    }
}
