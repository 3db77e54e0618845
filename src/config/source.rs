//! Source configuration entry

use crate::git::RepositoryDescriptor;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A repository to acquire, as declared in the configuration file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

impl Source {
    /// Create a new source with only a name and URL
    pub fn new(name: String, url: String) -> Self {
        Self {
            name,
            url,
            revision: None,
            context: None,
            path: None,
            token_env: None,
            tags: Vec::new(),
            config_dir: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn add_tag(&mut self, tag: String) {
        if !self.has_tag(&tag) {
            self.tags.push(tag);
        }
    }

    /// Remember the directory of the configuration file this source came from
    pub fn set_config_dir(&mut self, config_dir: Option<PathBuf>) {
        self.config_dir = config_dir;
    }

    /// Directory the source is cloned into
    ///
    /// `path` (or the config directory when unset) is the parent; the source
    /// name is the leaf. Relative paths resolve against the config directory.
    pub fn target_dir(&self) -> PathBuf {
        let config_dir = self.config_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let parent = match &self.path {
            Some(path) => {
                let path = PathBuf::from(path);
                if path.is_absolute() {
                    path
                } else {
                    config_dir.join(path)
                }
            }
            None => config_dir,
        };
        parent.join(&self.name)
    }

    /// Resolve the access token from `token_env`, if configured
    pub fn access_token(&self) -> Result<Option<String>> {
        match &self.token_env {
            Some(var) => {
                let token = std::env::var(var).with_context(|| {
                    format!(
                        "Environment variable '{}' for source '{}' is not set",
                        var, self.name
                    )
                })?;
                Ok(Some(token))
            }
            None => Ok(None),
        }
    }

    /// Build the descriptor handed to the acquirer
    pub fn descriptor(&self) -> Result<RepositoryDescriptor> {
        let mut descriptor = RepositoryDescriptor::new(self.url.clone());
        if let Some(revision) = &self.revision {
            descriptor = descriptor.with_revision(revision.clone());
        }
        if let Some(token) = self.access_token()? {
            descriptor = descriptor.with_access_token(token);
        }
        Ok(descriptor)
    }
}
