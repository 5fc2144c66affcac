//! Configuration type definitions for the runner
//!
//! Every field has a default, and the defaults are the runner's wire
//! contract: an empty YAML document (or no config file at all) yields the
//! `/tmp/output` working directory and the `__PYTHON_DONE__` / `ERROR: `
//! sentinels the orchestrator parses.

use crate::errors::RunnerError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WORKSPACE_PATH: &str = "/tmp/output";
pub const DEFAULT_DONE_MARKER: &str = "__PYTHON_DONE__";
pub const DEFAULT_ERROR_PREFIX: &str = "ERROR: ";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RunnerConfig {
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub protocol: ProtocolConfig,
    #[serde(default)]
    pub interpreter: InterpreterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkspaceConfig {
    #[serde(default = "default_workspace_path")]
    pub path: PathBuf,
}

/// The two line shapes written to stdout at the end of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolConfig {
    #[serde(default = "default_done_marker")]
    pub done_marker: String,
    #[serde(default = "default_error_prefix")]
    pub error_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterpreterConfig {
    /// Codec used to turn the raw stdin bytes into source text.
    #[serde(default = "default_source_encoding")]
    pub source_encoding: String,
    /// File name the program is compiled under; shows up in syntax errors.
    #[serde(default = "default_filename")]
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_workspace_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORKSPACE_PATH)
}

fn default_done_marker() -> String {
    DEFAULT_DONE_MARKER.to_string()
}

fn default_error_prefix() -> String {
    DEFAULT_ERROR_PREFIX.to_string()
}

fn default_source_encoding() -> String {
    "utf-8".to_string()
}

fn default_filename() -> String {
    "<string>".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            path: default_workspace_path(),
        }
    }
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            done_marker: default_done_marker(),
            error_prefix: default_error_prefix(),
        }
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            source_encoding: default_source_encoding(),
            filename: default_filename(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), RunnerError> {
        if self.workspace.path.as_os_str().is_empty() {
            return Err(RunnerError::ConfigError(
                "Workspace path cannot be empty".to_string(),
            ));
        }

        if self.protocol.done_marker.is_empty() {
            return Err(RunnerError::ConfigError(
                "Protocol done_marker cannot be empty".to_string(),
            ));
        }

        // Each sentinel must fit on the single status line.
        if contains_line_break(&self.protocol.done_marker) {
            return Err(RunnerError::ConfigError(
                "Protocol done_marker must be a single line".to_string(),
            ));
        }
        if contains_line_break(&self.protocol.error_prefix) {
            return Err(RunnerError::ConfigError(
                "Protocol error_prefix must be a single line".to_string(),
            ));
        }

        if self.interpreter.source_encoding.trim().is_empty() {
            return Err(RunnerError::ConfigError(
                "Interpreter source_encoding cannot be empty".to_string(),
            ));
        }

        if self.interpreter.filename.is_empty() {
            return Err(RunnerError::ConfigError(
                "Interpreter filename cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn contains_line_break(value: &str) -> bool {
    value.contains('\n') || value.contains('\r')
}
