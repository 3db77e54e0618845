//! Branch command implementation

use super::{Command, CommandContext};
use crate::git;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::PathBuf;

/// Print the checked out branch of a local repository, or of every
/// selected source when no path is given
pub struct BranchCommand {
    pub path: Option<PathBuf>,
}

#[async_trait]
impl Command for BranchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        if let Some(path) = &self.path {
            let path = path.clone();
            let branch = tokio::task::spawn_blocking(move || git::current_branch(&path)).await??;
            println!("{branch}");
            return Ok(());
        }

        for source in context.selected_sources() {
            let target = source.target_dir();
            let result = tokio::task::spawn_blocking(move || git::current_branch(&target)).await?;
            match result {
                Ok(branch) => println!("{} | {}", source.name.cyan().bold(), branch),
                Err(e) => eprintln!("{} | {}", source.name.cyan().bold(), e.to_string().red()),
            }
        }
        Ok(())
    }
}
