//! Command argument validation utilities
//!
//! This module provides centralized validation logic for command arguments
//! after clap parsing. It handles domain-specific validation rules that
//! go beyond basic argument parsing.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Mutually exclusive arguments were both provided
    MutualExclusivity { first: String, second: String },
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// Empty collection when at least one item is required
    EmptyCollection { argument: String },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MutualExclusivity { first, second } => {
                write!(f, "Cannot specify both {} and {}", first, second)
            }
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "Either {} or {} must be provided",
                        alternatives.join(", "),
                        argument
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::EmptyCollection { argument } => {
                write!(f, "At least one {} must be provided", argument)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

fn invalid_value(argument: &str, value: &str, reason: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::InvalidValue {
        argument: argument.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

/// Validate clone command arguments
///
/// A one-off clone needs both `--url` and `--target`; selecting configured
/// sources by name cannot be combined with `--url`.
pub fn validate_clone_args(
    url: &Option<String>,
    target: &Option<String>,
    repos: &Option<Vec<String>>,
) -> Result<()> {
    match (url, target) {
        (Some(_), None) => {
            return Err(validation_error_to_anyhow(
                CommandValidationError::MissingRequired {
                    argument: "--target".to_string(),
                    alternatives: vec![],
                },
            ));
        }
        (None, Some(_)) => {
            return Err(validation_error_to_anyhow(
                CommandValidationError::MissingRequired {
                    argument: "--url".to_string(),
                    alternatives: vec![],
                },
            ));
        }
        _ => {}
    }

    if url.is_some() && repos.is_some() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MutualExclusivity {
                first: "--url".to_string(),
                second: "source names".to_string(),
            },
        ));
    }

    Ok(())
}

/// Validate that at least one source is configured
pub fn validate_has_sources(count: usize) -> Result<()> {
    if count == 0 {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyCollection {
                argument: "source".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate tag arguments
///
/// Ensures tag filters are not empty when provided
pub fn validate_tag_filters(tags: &[String]) -> Result<()> {
    match tags.iter().find(|tag| tag.trim().is_empty()) {
        Some(tag) => Err(invalid_value("tag", tag, "tag cannot be empty or whitespace only")),
        None => Ok(()),
    }
}

/// Validate source names
///
/// Ensures source names are not empty when provided
pub fn validate_source_names(names: &[String]) -> Result<()> {
    match names.iter().find(|name| name.trim().is_empty()) {
        Some(name) => Err(invalid_value(
            "source name",
            name,
            "source name cannot be empty or whitespace only",
        )),
        None => Ok(()),
    }
}

/// Validate output file path
pub fn validate_output_path(output: &Option<String>) -> Result<()> {
    if let Some(path) = output
        && path.trim().is_empty()
    {
        return Err(invalid_value("output", path, "output path cannot be empty or whitespace only"));
    }
    Ok(())
}

/// Validate a revision passed on the command line
///
/// Revisions are handed to `git checkout`, so anything that git would read
/// as an option is rejected along with obviously malformed ref names.
pub fn validate_revision(revision: &Option<String>) -> Result<()> {
    if let Some(name) = revision {
        if name.trim().is_empty() {
            return Err(invalid_value("revision", name, "revision cannot be empty or whitespace only"));
        }

        if name.starts_with('-')
            || name.ends_with('.')
            || name.contains("..")
            || name.chars().any(char::is_whitespace)
        {
            return Err(invalid_value("revision", name, "invalid Git revision format"));
        }
    }
    Ok(())
}
