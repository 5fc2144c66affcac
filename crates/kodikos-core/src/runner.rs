//! The single-shot run: prepare, capture, execute, report.
//!
//! Faults before execution come back as `Err(RunnerError)` and must end the
//! process abnormally. Everything the submitted program does comes back as a
//! [`RunStatus`], and only an ordinary exception or a clean finish produce a
//! status line.

use crate::config::RunnerConfig;
use crate::errors::{ExecutionFault, RunnerError};
use crate::executors::CodeExecutor;
use crate::program::capture_program;
use crate::report::{report_outcome, Outcome};
use crate::workspace::prepare_workspace;
use std::io::Write;
use tokio::io::AsyncRead;

/// How a run ended, from the point of view of the process exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// A status line was written.
    Reported(Outcome),
    /// The program requested this exit status; nothing was reported.
    Exited(i32),
    /// The program was stopped by `KeyboardInterrupt`.
    Interrupted(String),
    /// The program was cut short by another non-ordinary exception.
    Aborted(String),
}

/// Status the host interpreter uses for an unhandled `KeyboardInterrupt`
/// (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

impl RunStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Reported(_) => 0,
            RunStatus::Exited(code) => *code,
            RunStatus::Interrupted(_) => INTERRUPTED_EXIT_CODE,
            RunStatus::Aborted(_) => 1,
        }
    }
}

pub struct Runner {
    config: RunnerConfig,
    executor: Box<dyn CodeExecutor>,
}

impl Runner {
    pub fn new(config: RunnerConfig, executor: Box<dyn CodeExecutor>) -> Self {
        Self { config, executor }
    }

    /// Serve exactly one program read from `input`, writing the status line to
    /// `output`. Changes the process current directory, and shuts the executor
    /// down once a program has run, so it can only be called once per process.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<RunStatus, RunnerError>
    where
        R: AsyncRead + Unpin,
        W: Write,
    {
        prepare_workspace(&self.config.workspace.path).await?;

        let program = capture_program(input).await?;

        log::debug!(
            "Executing {} byte {} program",
            program.len(),
            self.executor.language()
        );
        let status = match self.executor.execute(&program).await {
            Ok(()) => RunStatus::Reported(Outcome::Completed),
            Err(ExecutionFault::Raised(message)) => {
                log::debug!("Program raised: {}", message);
                RunStatus::Reported(Outcome::Failed(message))
            }
            Err(ExecutionFault::Exited(code)) => {
                log::debug!("Program exited with status {}", code);
                RunStatus::Exited(code)
            }
            Err(ExecutionFault::Interrupted(message)) => {
                log::error!("Program interrupted: {}", message);
                RunStatus::Interrupted(message)
            }
            Err(ExecutionFault::Aborted(message)) => {
                log::error!("Program aborted: {}", message);
                RunStatus::Aborted(message)
            }
        };

        let reported = match &status {
            RunStatus::Reported(outcome) => report_outcome(output, &self.config.protocol, outcome),
            _ => Ok(()),
        };

        // Work the program defers to interpreter exit (atexit handlers,
        // non-daemon threads, unclosed files) happens after the status line.
        self.executor.shutdown();

        reported.map_err(RunnerError::Report)?;
        Ok(status)
    }
}
