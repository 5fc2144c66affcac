//! Error types for the two failure tiers of a run
//!
//! `RunnerError` covers everything that goes wrong around the submitted
//! program: an unusable working directory, a broken input stream, a bad
//! configuration. These are never turned into an `ERROR: ` line; they end the
//! process abnormally so the orchestrator can tell a misconfigured sandbox
//! apart from a faulty program.
//!
//! `ExecutionFault` covers what the submitted program itself did. Only the
//! `Raised` variant is reported on the protocol channel.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to prepare working directory {path}: {source}")]
    Workspace {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read submitted program: {0}")]
    Input(#[source] std::io::Error),
    #[error("Failed to write outcome report: {0}")]
    Report(#[source] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RunnerError {
    pub fn workspace(path: &std::path::Path, source: std::io::Error) -> Self {
        RunnerError::Workspace {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Outcome of a submitted program that did not run to completion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionFault {
    /// An ordinary exception escaped the program. Carries the exception's
    /// message text exactly as the interpreter renders it.
    #[error("{0}")]
    Raised(String),
    /// The program asked the interpreter to exit with the given status.
    #[error("Program exited with status {0}")]
    Exited(i32),
    /// `KeyboardInterrupt` escaped the program.
    #[error("Program interrupted: {0}")]
    Interrupted(String),
    /// Any other non-ordinary exception (e.g. `GeneratorExit`) escaped.
    #[error("Program aborted: {0}")]
    Aborted(String),
}
