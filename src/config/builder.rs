//! Source builder utilities

use super::Source;

/// Builder for creating source configurations
pub struct SourceBuilder {
    name: String,
    url: String,
    revision: Option<String>,
    context: Option<String>,
    path: Option<String>,
    token_env: Option<String>,
    tags: Vec<String>,
}

impl SourceBuilder {
    /// Create a new source builder
    pub fn new(name: String, url: String) -> Self {
        Self {
            name,
            url,
            revision: None,
            context: None,
            path: None,
            token_env: None,
            tags: Vec::new(),
        }
    }

    /// Pin the source to a branch, tag or commit
    pub fn with_revision(mut self, revision: String) -> Self {
        self.revision = Some(revision);
        self
    }

    /// Set the subdirectory used when deriving raw content links
    pub fn with_context(mut self, context: String) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the parent directory for the clone
    pub fn with_path(mut self, path: String) -> Self {
        self.path = Some(path);
        self
    }

    /// Read the access token from this environment variable
    pub fn with_token_env(mut self, token_env: String) -> Self {
        self.token_env = Some(token_env);
        self
    }

    /// Add tags to the source
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Build the source
    pub fn build(self) -> Source {
        Source {
            name: self.name,
            url: self.url,
            revision: self.revision,
            context: self.context,
            path: self.path,
            token_env: self.token_env,
            tags: self.tags,
            config_dir: None,
        }
    }
}
