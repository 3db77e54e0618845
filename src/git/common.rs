//! Common git utilities and shared helpers
//!
//! This module contains utilities that are shared across different git workflows,
//! such as logging and output handling.

use colored::*;
use std::process::Output;

/// Logger for git operations with consistent formatting
///
/// Each message is prefixed with a label (a source name or a
/// credential-free repository URL) in cyan/bold for easy identification.
/// Callers must never pass a label that still carries an access token.
///
/// ## Example
///
/// ```rust,no_run
/// use repo_fetch::git::Logger;
///
/// let logger = Logger::default();
/// logger.info("https://github.com/org/repo", "Starting operation");
/// logger.success("https://github.com/org/repo", "Operation completed");
/// ```
#[derive(Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    pub fn info(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg);
    }

    pub fn success(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg.green());
    }

    pub fn warn(&self, label: &str, msg: &str) {
        println!("{} | {}", label.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, label: &str, msg: &str) {
        eprintln!("{} | {}", label.cyan().bold(), msg.red());
    }
}

/// Stdout followed by stderr of a finished git command, lossily decoded
pub(crate) fn combined_output(output: &Output) -> String {
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}
