//! Sample index operations

use crate::client::RegistryClient;
use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Path of the sample index, relative to the registry base URL
pub const SAMPLE_INDEX_PATH: &str = "index/sample";

/// A single entry of the registry sample index
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub git: Option<GitSection>,
}

/// Git location of a sample
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GitSection {
    #[serde(default)]
    pub remotes: BTreeMap<String, String>,
    #[serde(default)]
    pub revision: Option<String>,
}

impl GitSection {
    /// Look up a remote URL by remote name, ignoring empty values
    pub fn remote(&self, name: &str) -> Option<&str> {
        self.remotes
            .get(name)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

impl RegistryClient {
    /// Fetch the sample index of a registry
    ///
    /// # Arguments
    /// * `registry_url` - Base URL of the registry, e.g. `https://registry.devfile.io`
    ///
    /// # Errors
    /// Returns an error if the request fails, the registry answers with
    /// anything other than `200 OK`, or the body is not a valid index.
    pub async fn get_sample_index(&self, registry_url: &str) -> Result<Vec<IndexEntry>> {
        let url = format!(
            "{}/{}",
            registry_url.trim_end_matches('/'),
            SAMPLE_INDEX_PATH
        );
        let mut request = self.client.get(&url);

        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach registry at {}", registry_url))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!(
                "Failed to fetch registry index from {} ({} {})",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            ));
        }

        let entries: Vec<IndexEntry> = response
            .json()
            .await
            .context("Failed to parse registry index response")?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DEFAULT_USER_AGENT;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc::{self, Receiver};
    use std::time::Duration;

    const INDEX_JSON: &str = r#"[
        {
            "name": "nodejs-basic",
            "displayName": "Basic Node.js",
            "language": "JavaScript",
            "projectType": "Node.js",
            "tags": ["NodeJS", "Express"],
            "git": {
                "remotes": {
                    "origin": "https://github.com/devfile-samples/nodejs-basic.git"
                }
            }
        },
        {
            "name": "code-with-quarkus",
            "language": "Java",
            "projectType": "Quarkus"
        }
    ]"#;

    /// Serve a single HTTP response on a random local port
    ///
    /// Returns the base URL and a channel yielding the raw request head.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (sender, receiver) = mpsc::channel();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = sender.send(String::from_utf8_lossy(&request).to_lowercase());
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{}", addr), receiver)
    }

    fn received(receiver: &Receiver<String>) -> String {
        receiver.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_parse_index_entries() {
        let entries: Vec<IndexEntry> = serde_json::from_str(INDEX_JSON).unwrap();
        assert_eq!(entries.len(), 2);

        let node = &entries[0];
        assert_eq!(node.name, "nodejs-basic");
        assert_eq!(node.display_name, "Basic Node.js");
        assert_eq!(node.project_type, "Node.js");
        assert_eq!(node.tags, vec!["NodeJS", "Express"]);
        assert_eq!(
            node.git.as_ref().unwrap().remote("origin"),
            Some("https://github.com/devfile-samples/nodejs-basic.git")
        );

        let quarkus = &entries[1];
        assert!(quarkus.git.is_none());
        assert!(quarkus.tags.is_empty());
    }

    #[test]
    fn test_remote_ignores_empty_url() {
        let mut remotes = BTreeMap::new();
        remotes.insert("origin".to_string(), String::new());
        let git = GitSection {
            remotes,
            revision: None,
        };
        assert_eq!(git.remote("origin"), None);
        assert_eq!(git.remote("upstream"), None);
    }

    #[tokio::test]
    async fn test_get_sample_index() {
        let (base, requests) = serve_once("200 OK", INDEX_JSON);
        let client = RegistryClient::default();
        let entries = client.get_sample_index(&base).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "code-with-quarkus");

        let request = received(&requests);
        assert!(request.starts_with("get /index/sample "));
        assert!(request.contains(&format!("user-agent: {}", DEFAULT_USER_AGENT)));
        assert!(!request.contains("authorization:"));
    }

    #[tokio::test]
    async fn test_get_sample_index_sends_bearer_token() {
        let (base, requests) = serve_once("200 OK", "[]");
        let client = RegistryClient::new(Some("secret".to_string()));
        assert!(client.is_authenticated());

        let entries = client.get_sample_index(&base).await.unwrap();
        assert!(entries.is_empty());
        assert!(received(&requests).contains("authorization: bearer secret"));
    }

    #[tokio::test]
    async fn test_get_sample_index_keeps_shared_client_user_agent() {
        let (base, requests) = serve_once("200 OK", "[]");
        let shared = reqwest::Client::builder()
            .user_agent("repo-fetch/test")
            .build()
            .unwrap();
        let client = RegistryClient::with_client(shared, None);

        client.get_sample_index(&base).await.unwrap();
        let request = received(&requests);
        assert!(request.contains("user-agent: repo-fetch/test"));
        assert!(!request.contains("registry-index/"));
    }

    #[tokio::test]
    async fn test_get_sample_index_error_status() {
        let (base, _requests) = serve_once("404 Not Found", "");
        let client = RegistryClient::default();

        let err = client.get_sample_index(&base).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_get_sample_index_rejects_other_success_codes() {
        let (base, _requests) = serve_once("203 Non-Authoritative Information", "[]");
        let client = RegistryClient::default();

        let err = client.get_sample_index(&base).await.unwrap_err();
        assert!(err.to_string().contains("203"));
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        assert!(!RegistryClient::new(Some(String::new())).is_authenticated());
        assert!(!RegistryClient::default().is_authenticated());
    }
}
