//! Sample command implementation

use super::{Command, CommandContext};
use crate::git::{self, RepositoryDescriptor};
use crate::http::Fetcher;
use crate::registry;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use registry_index::RegistryClient;
use std::path::PathBuf;

/// Clone a registry sample by name
pub struct SampleCommand {
    pub name: String,
    pub target: PathBuf,
    pub revision: Option<String>,
    /// Access token for private sample repositories
    pub token: Option<String>,
    /// Overrides the registry from the configuration
    pub registry: Option<String>,
}

#[async_trait]
impl Command for SampleCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let registry_url = self
            .registry
            .as_deref()
            .unwrap_or_else(|| context.config.registry_url());

        let fetcher = Fetcher::new(context.config.fetch_options())?;
        let client = RegistryClient::with_client(fetcher.client().clone(), None);

        let repo_url = registry::sample_repo_url(&client, &self.name, registry_url).await?;
        println!(
            "{}",
            format!("Found sample '{}' at {}", self.name, repo_url).green()
        );

        let mut descriptor = RepositoryDescriptor::new(repo_url);
        if let Some(revision) = &self.revision {
            descriptor = descriptor.with_revision(revision.clone());
        }
        if let Some(token) = &self.token {
            descriptor = descriptor.with_access_token(token.clone());
        }

        let target = self.target.clone();
        tokio::task::spawn_blocking(move || git::clone_repository(&target, &descriptor))
            .await??;
        Ok(())
    }
}
