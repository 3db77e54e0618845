//! Types command implementation

use super::{Command, CommandContext};
use crate::http::Fetcher;
use crate::registry;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use registry_index::RegistryClient;

/// List the sample types published by a registry
pub struct TypesCommand {
    pub registry: Option<String>,
    /// Print JSON instead of a table
    pub json: bool,
}

#[async_trait]
impl Command for TypesCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let registry_url = self
            .registry
            .as_deref()
            .unwrap_or_else(|| context.config.registry_url());

        let fetcher = Fetcher::new(context.config.fetch_options())?;
        let client = RegistryClient::with_client(fetcher.client().clone(), None);
        let types = registry::sample_devfile_types(&client, registry_url).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&types)?);
            return Ok(());
        }

        if types.is_empty() {
            println!("{}", format!("No samples found in {registry_url}").yellow());
            return Ok(());
        }

        for devfile_type in &types {
            println!(
                "{:<40} {:<12} {:<16} {}",
                devfile_type.name.cyan().bold(),
                devfile_type.language,
                devfile_type.project_type,
                devfile_type.tags.join(",")
            );
        }
        Ok(())
    }
}
