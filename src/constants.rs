//! Central constants for the repo-fetch application

/// Default values for Git operations
pub mod git {
    /// Branch assumed when building raw content URLs without a revision
    pub const FALLBACK_BRANCH: &str = "main";

    /// Environment variable that stops git from prompting on the terminal
    pub const TERMINAL_PROMPT_ENV: (&str, &str) = ("GIT_TERMINAL_PROMPT", "0");

    /// Askpass program answering credential prompts with an empty line
    pub const ASKPASS_ENV: (&str, &str) = ("GIT_ASKPASS", "/bin/echo");

    /// Username used when a token is embedded in the clone URL
    pub const TOKEN_USER: &str = "token";

    /// Permissions for freshly created clone targets (no world access)
    pub const TARGET_DIR_MODE: u32 = 0o750;
}

/// Default values for GitHub URL handling
pub mod github {
    /// Host of GitHub browse URLs
    pub const HOST: &str = "github.com";

    /// Host serving raw file contents
    pub const RAW_HOST: &str = "raw.githubusercontent.com";

    /// Substring identifying GitHub hosts, including enterprise instances
    pub const HOST_MARKER: &str = "github";

    /// Substring identifying hosts that already serve raw content
    pub const RAW_MARKER: &str = "raw";

    /// Path segment used by browse URLs pointing at a specific ref
    pub const TREE_SEGMENT: &str = "tree";

    /// Environment variable consulted for an access token
    pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
}

/// Default values for HTTP operations
pub mod http {
    /// Default timeout for a single request, in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default User-Agent header for requests
    pub const DEFAULT_USER_AGENT: &str = concat!("repo-fetch/", env!("CARGO_PKG_VERSION"));
}

/// Default values for the devfile registry
pub mod registry {
    /// Public devfile registry
    pub const DEFAULT_REGISTRY_URL: &str = "https://registry.devfile.io";

    /// Remote holding the canonical location of a sample
    pub const ORIGIN_REMOTE: &str = "origin";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "repo-fetch.yaml";
}
