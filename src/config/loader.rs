//! Configuration file loading and saving

use super::Source;
use super::validation;
use crate::constants;
use crate::http::FetchOptions;
use crate::utils::filters;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_secs: Option<u64>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file '{}'", path))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file '{}'", path))?;

        let config_dir = Path::new(path).parent().map(|p| p.to_path_buf());
        for source in &mut config.sources {
            source.set_config_dir(config_dir.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to an empty one when the file is absent
    ///
    /// Commands that work without configured sources (raw URLs, registry
    /// lookups) still pick up `registry` and `http_timeout_secs` when a file
    /// exists.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Alias for load method
    pub fn load_config(path: &str) -> Result<Self> {
        Self::load(path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, format!("---\n{}", yaml))
            .with_context(|| format!("Failed to write configuration file '{}'", path))?;
        Ok(())
    }

    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry used for sample lookups
    pub fn registry_url(&self) -> &str {
        self.registry
            .as_deref()
            .unwrap_or(constants::registry::DEFAULT_REGISTRY_URL)
    }

    /// Timeout applied to every HTTP request
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(
            self.http_timeout_secs
                .unwrap_or(constants::http::DEFAULT_TIMEOUT_SECS),
        )
    }

    /// HTTP options derived from this configuration
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: self.http_timeout(),
        }
    }

    /// Get source by name
    pub fn get_source(&self, name: &str) -> Option<&Source> {
        self.sources.iter().find(|source| source.name == name)
    }

    /// Add a source to the configuration
    pub fn add_source(&mut self, source: Source) -> Result<()> {
        if self.get_source(&source.name).is_some() {
            anyhow::bail!("Source '{}' already exists", source.name);
        }

        validation::validate_source(&source).map_err(validation::validation_errors_to_anyhow)?;

        self.sources.push(source);
        Ok(())
    }

    /// Remove a source from the configuration
    pub fn remove_source(&mut self, name: &str) -> bool {
        let initial_len = self.sources.len();
        self.sources.retain(|source| source.name != name);
        self.sources.len() != initial_len
    }

    /// Filter sources by names and tags
    pub fn filter_sources(
        &self,
        include_tags: &[String],
        exclude_tags: &[String],
        names: Option<&[String]>,
    ) -> Vec<Source> {
        filters::filter_sources(&self.sources, include_tags, exclude_tags, names)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Err(error) = validation::validate_http_timeout(self.http_timeout_secs) {
            errors.push(error);
        }
        if let Err(mut source_errors) = validation::validate_sources(&self.sources) {
            errors.append(&mut source_errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(validation::validation_errors_to_anyhow(errors))
        }
    }
}
