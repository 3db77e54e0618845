//! Raw URL command implementation

use super::{Command, CommandContext};
use crate::github;
use anyhow::Result;
use async_trait::async_trait;

/// Print the raw content URL for a GitHub browse URL
pub struct RawUrlCommand {
    pub url: String,
    pub revision: String,
    pub context: String,
    /// Reject URLs that are not hosted on GitHub
    pub validate: bool,
}

#[async_trait]
impl Command for RawUrlCommand {
    async fn execute(&self, _context: &CommandContext) -> Result<()> {
        if self.validate {
            github::validate_github_url(&self.url)?;
        }
        let raw = github::resolve_git_link(&self.url, &self.revision, &self.context)?;
        println!("{raw}");
        Ok(())
    }
}
