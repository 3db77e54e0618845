//! Registry client implementation

/// User-Agent of clients created by [`RegistryClient::new`]
pub const DEFAULT_USER_AGENT: &str = concat!("registry-index/", env!("CARGO_PKG_VERSION"));

/// Registry client for making index requests
pub struct RegistryClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: Option<String>,
}

impl RegistryClient {
    /// Create a new registry client with an optional bearer token
    pub fn new(token: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .unwrap_or_default();
        Self::with_client(client, token)
    }

    /// Create a registry client on top of an already configured HTTP client
    ///
    /// Useful when the caller wants its own timeouts and User-Agent applied
    /// to index requests; both are left untouched.
    pub fn with_client(client: reqwest::Client, token: Option<String>) -> Self {
        Self { client, token }
    }

    /// Check if the client sends an authorization header
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new(None)
    }
}
