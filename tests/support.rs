//! Common test support utilities and fixtures
//!
//! Git fixtures are plain local repositories created with the `git` binary,
//! so acquisition can be exercised without network access. The HTTP helpers
//! serve canned responses on a loopback port.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::process::Command;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Run git in `dir`, panicking with its output on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Test User",
            "-c",
            "user.email=test@example.com",
            "-c",
            "commit.gpgsign=false",
            "-c",
            "tag.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Initialize a git repository on `main` with a single commit
pub fn init_git_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("Failed to create repository directory");
    git(path, &["init", "--quiet"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    std::fs::write(path.join("README.md"), "# Test Repository").expect("Failed to write README");
    git(path, &["add", "."]);
    git(path, &["commit", "--quiet", "-m", "Initial commit"]);
}

/// Initialize a repository with a `dev` branch and a `v1.0` tag
///
/// `dev` carries an extra `dev.txt` file; `v1.0` points at the initial commit.
pub fn init_git_repo_with_refs(path: &Path) {
    init_git_repo(path);
    git(path, &["tag", "v1.0"]);
    git(path, &["checkout", "--quiet", "-b", "dev"]);
    std::fs::write(path.join("dev.txt"), "dev only").expect("Failed to write dev.txt");
    git(path, &["add", "."]);
    git(path, &["commit", "--quiet", "-m", "Dev commit"]);
    git(path, &["checkout", "--quiet", "main"]);
}

/// URL of a local fixture repository as accepted by `git clone`
pub fn repo_url(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Number of entries directly inside `dir`
pub fn entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.count())
        .unwrap_or(0)
}

/// A canned HTTP response
pub struct Response {
    pub status: u16,
    pub reason: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            reason: "OK",
            content_type: "text/plain",
            body: body.into(),
        }
    }

    pub fn json(body: &str) -> Self {
        Self {
            content_type: "application/json",
            ..Self::ok(body)
        }
    }

    pub fn status(status: u16, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            ..Self::ok("")
        }
    }
}

/// A loopback server answering a fixed number of requests
pub struct TestServer {
    pub base_url: String,
    requests: mpsc::Receiver<String>,
}

impl TestServer {
    /// Serve `response` to the next incoming request
    pub fn serve_once(response: Response) -> Self {
        Self::serve(vec![response])
    }

    /// Serve each response, in order, to one request each
    pub fn serve(responses: Vec<Response>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (sender, requests) = mpsc::channel();

        thread::spawn(move || {
            for response in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let request = read_request(&mut stream);
                let _ = sender.send(request);
                let head = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    response.status,
                    response.reason,
                    response.content_type,
                    response.body.len()
                );
                let _ = stream.write_all(head.as_bytes());
                let _ = stream.write_all(&response.body);
                let _ = stream.flush();
            }
        });

        Self { base_url, requests }
    }

    /// Accept a connection and never answer it
    pub fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (_sender, requests) = mpsc::channel();

        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(10));
                drop(stream);
            }
        });

        Self { base_url, requests }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Raw head of the next received request
    pub fn received(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("No request received")
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}
