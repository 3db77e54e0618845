//! Base types and traits for the command pattern

use crate::config::{Config, Source};
use anyhow::Result;

/// Context passed to all commands containing shared configuration and options
#[derive(Clone, Default)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: Config,
    /// Tag filters for sources (all must match)
    pub tag: Vec<String>,
    /// Tags to exclude from sources
    pub exclude_tag: Vec<String>,
    /// Whether to execute operations in parallel
    pub parallel: bool,
    /// Optional list of specific source names to operate on
    pub repos: Option<Vec<String>>,
}

impl CommandContext {
    /// Create a context that carries only a configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Sources selected by the name and tag filters of this context
    pub fn selected_sources(&self) -> Vec<Source> {
        self.config
            .filter_sources(&self.tag, &self.exclude_tag, self.repos.as_deref())
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
