//! Core of a single-shot code runner.
//!
//! One process serves one program: it prepares a fixed working directory,
//! reads the whole program from an input stream, runs it on an interpreter
//! embedded in the process, and reports the result as a single text line.
//!
//! # Architecture Overview
//!
//! - **Configuration**: YAML-loadable settings whose defaults are the wire contract
//! - **Workspace**: creation of the working directory and the switch into it
//! - **Program capture**: reading the input stream to end-of-stream
//! - **Execution environments**: the executor seam and the embedded CPython executor
//! - **Reporting**: the done-marker / error-prefix status line
//! - **Runner**: the linear sequence tying the stages together

pub mod config;
pub mod errors;
pub mod executors;
pub mod program;
pub mod report;
pub mod runner;
pub mod workspace;

pub use config::*;
pub use errors::{ExecutionFault, RunnerError};
pub use executors::{CodeExecutor, EmbeddedPythonExecutor};
pub use program::{capture_program, SubmittedProgram};
pub use report::{report_outcome, Outcome};
pub use runner::{RunStatus, Runner, INTERRUPTED_EXIT_CODE};
pub use workspace::prepare_workspace;

#[cfg(test)]
pub mod test_utils;
