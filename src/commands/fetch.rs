//! Fetch command implementation

use super::{Command, CommandContext};
use crate::http::{self, Fetcher};
use crate::utils::ensure_directory_exists;
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use std::io::Write;
use std::path::Path;

/// Download a single file from a GitHub repository without cloning it
pub struct FetchCommand {
    pub url: String,
    pub revision: String,
    pub context: String,
    pub token: Option<String>,
    /// Write the file here instead of stdout
    pub output: Option<String>,
}

#[async_trait]
impl Command for FetchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let fetcher = Fetcher::new(context.config.fetch_options())?;
        let body = http::fetch_raw_file(
            &fetcher,
            &self.url,
            &self.revision,
            &self.context,
            self.token.as_deref(),
        )
        .await?;

        match &self.output {
            Some(output) => {
                if let Some(parent) = Path::new(output).parent()
                    && !parent.as_os_str().is_empty()
                {
                    ensure_directory_exists(&parent.to_string_lossy())?;
                }
                std::fs::write(output, &body)
                    .with_context(|| format!("Failed to write {}", output))?;
                println!(
                    "{}",
                    format!("Wrote {} bytes to {}", body.len(), output).green()
                );
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&body)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
