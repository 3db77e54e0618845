//! Configuration management module

pub mod builder;
pub mod loader;
pub mod source;
pub mod validation;

pub use builder::SourceBuilder;
pub use loader::Config;
pub use source::Source;
pub use validation::ValidationError;
