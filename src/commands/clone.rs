//! Clone command implementation

use super::validators::validate_has_sources;
use super::{Command, CommandContext};
use crate::config::Source;
use crate::error::SourceError;
use crate::git::{self, RepositoryDescriptor};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use futures::future::join_all;
use std::path::PathBuf;

/// Clone command for acquiring repositories
///
/// Without `one_off` every configured source selected by the context is
/// cloned into its target directory.
pub struct CloneCommand {
    pub one_off: Option<OneOffClone>,
}

/// A single repository given on the command line
pub struct OneOffClone {
    pub target: PathBuf,
    pub descriptor: RepositoryDescriptor,
}

#[async_trait]
impl Command for CloneCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        if let Some(one_off) = &self.one_off {
            let target = one_off.target.clone();
            let descriptor = one_off.descriptor.clone();
            tokio::task::spawn_blocking(move || git::clone_repository(&target, &descriptor))
                .await?
                .map_err(|e| {
                    print_hint(&e);
                    anyhow::Error::new(e)
                })?;
            return Ok(());
        }

        validate_has_sources(context.config.sources.len())?;

        let sources = context.selected_sources();
        if sources.is_empty() {
            let filter_desc = match (context.tag.is_empty(), &context.repos) {
                (false, Some(repos)) => {
                    format!("tags {:?} and sources {repos:?}", context.tag)
                }
                (false, None) => format!("tags {:?}", context.tag),
                (true, Some(repos)) => format!("sources {repos:?}"),
                (true, None) => "the given filters".to_string(),
            };
            println!("{}", format!("No sources found with {filter_desc}").yellow());
            return Ok(());
        }

        println!(
            "{}",
            format!("Cloning {} sources...", sources.len()).green()
        );

        let results: Vec<(String, Result<()>)> = if context.parallel {
            join_all(sources.into_iter().map(clone_source)).await
        } else {
            let mut results = Vec::new();
            for source in sources {
                results.push(clone_source(source).await);
            }
            results
        };

        let mut errors = Vec::new();
        let mut successful = 0;
        for (name, result) in results {
            match result {
                Ok(()) => successful += 1,
                Err(e) => {
                    eprintln!("{}", format!("Error: {name}: {e}").red());
                    if let Some(source_error) = e.downcast_ref::<SourceError>() {
                        print_hint(source_error);
                    }
                    errors.push((name, e));
                }
            }
        }

        if errors.is_empty() {
            println!("{}", "Done cloning sources".green());
        } else {
            println!(
                "{}",
                format!(
                    "Completed with {} successful, {} failed",
                    successful,
                    errors.len()
                )
                .yellow()
            );

            if successful == 0 {
                return Err(anyhow::anyhow!(
                    "All clone operations failed. First error: {}",
                    errors[0].1
                ));
            }
        }

        Ok(())
    }
}

/// Clone one configured source on the blocking pool
async fn clone_source(source: Source) -> (String, Result<()>) {
    let name = source.name.clone();
    let result = async move {
        let descriptor = source.descriptor()?;
        let target = source.target_dir();
        tokio::task::spawn_blocking(move || git::clone_repository(&target, &descriptor))
            .await??;
        Ok(())
    }
    .await;
    (name, result)
}

/// Suggest a follow-up for failures the user can usually fix
fn print_hint(err: &SourceError) {
    let hint = match err {
        SourceError::AuthenticationFailed { .. } => {
            "Set 'token_env' for the source or check that the token is still valid"
        }
        SourceError::RepoNotFound { .. } => {
            "Check the URL; private repositories also report as not found without a token"
        }
        SourceError::RevisionNotFound { .. } => {
            "Remove the target directory before retrying with another revision"
        }
        _ => return,
    };
    eprintln!("{}", format!("Hint: {hint}").yellow());
}
