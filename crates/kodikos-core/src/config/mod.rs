//! Configuration module for the runner
//!
//! Supports an optional YAML file; the binary layers its command-line flags
//! on top of whatever is loaded here.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests;

use crate::errors::RunnerError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<RunnerConfig, RunnerError> {
    ConfigLoader::from_file(path).await
}

/// Validate a configuration
pub fn validate_config(config: &RunnerConfig) -> Result<(), RunnerError> {
    config.validate()
}
