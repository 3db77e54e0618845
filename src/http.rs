//! HTTP GET of raw files and registry documents
//!
//! A request either yields the full body of a `200 OK` response or an error.
//! Every request is bounded by [`FetchOptions::timeout`] for both connecting
//! and the complete exchange; nothing is retried.

use crate::constants;
use crate::github;
use anyhow::{Context, Result, anyhow};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Options applied to every request of a [`Fetcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(constants::http::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for downloading single files
pub struct Fetcher {
    client: Client,
    options: FetchOptions,
}

impl Fetcher {
    /// Create a fetcher with the given options
    pub fn new(options: FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(options.timeout)
            .timeout(options.timeout)
            .user_agent(constants::http::DEFAULT_USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, options })
    }

    pub fn options(&self) -> FetchOptions {
        self.options
    }

    /// Underlying HTTP client, shared with other API clients
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// GET `endpoint` and return the response body
    ///
    /// When `token` is set it is sent as `Authorization: Bearer <token>`.
    ///
    /// # Errors
    /// Returns an error if the request fails or times out, or if the
    /// response status is anything other than `200 OK`.
    pub async fn get_bytes(&self, endpoint: &str, token: Option<&str>) -> Result<Vec<u8>> {
        let mut request = self.client.get(endpoint);

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to request {}", endpoint))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!(
                "received a non-200 status ({}) when fetching {}",
                status.as_u16(),
                endpoint
            ));
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {}", endpoint))?;
        Ok(body.to_vec())
    }
}

/// Download a file from a GitHub repository without cloning it
///
/// `browse_url` is converted with [`github::to_raw_content_url`]; `context`
/// is the path of the file (or of its directory plus file name) inside the
/// repository.
pub async fn fetch_raw_file(
    fetcher: &Fetcher,
    browse_url: &str,
    revision: &str,
    context: &str,
    token: Option<&str>,
) -> Result<Vec<u8>> {
    let raw_url = github::to_raw_content_url(browse_url, revision, context)?;
    fetcher.get_bytes(&raw_url, token).await
}
