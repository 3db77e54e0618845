//! Command implementations for the command line tool

pub mod base;
pub mod branch;
pub mod clone;
pub mod fetch;
pub mod raw_url;
pub mod sample;
pub mod types;
pub mod validators;

pub use base::{Command, CommandContext};
pub use branch::BranchCommand;
pub use clone::CloneCommand;
pub use fetch::FetchCommand;
pub use raw_url::RawUrlCommand;
pub use sample::SampleCommand;
pub use types::TypesCommand;
