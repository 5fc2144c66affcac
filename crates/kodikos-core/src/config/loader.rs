//! Configuration loader for YAML files
//!
//! The orchestrator may hand the runner a YAML file to move the working
//! directory or change the sentinels. Missing sections fall back to the
//! defaults in [`crate::config::types`].

use crate::config::types::RunnerConfig;
use crate::errors::RunnerError;
use std::path::Path;
use tokio::fs;

/// Configuration loader with validation
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<RunnerConfig, RunnerError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            RunnerError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<RunnerConfig, RunnerError> {
        // serde_yaml rejects an empty document, so treat it as "all defaults".
        let config: RunnerConfig = if content.trim().is_empty() {
            RunnerConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                RunnerError::ConfigError(format!("Failed to parse YAML config: {}", e))
            })?
        };

        config.validate()?;
        log::debug!("Loaded runner configuration: {:?}", config);

        Ok(config)
    }
}
