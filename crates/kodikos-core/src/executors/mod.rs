//! Execution environments for submitted programs.
//!
//! An executor runs one program inside the runner process and classifies how
//! it ended. It never writes the status line itself; that is left to
//! [`crate::report`] so the wire format lives in one place.

use crate::errors::ExecutionFault;
use crate::program::SubmittedProgram;
use async_trait::async_trait;

#[async_trait]
pub trait CodeExecutor: Send + Sync {
    /// Language of the programs this executor understands.
    fn language(&self) -> &'static str;

    /// Run `program` to completion. `Ok(())` means it finished without an
    /// escaping exception.
    async fn execute(&self, program: &SubmittedProgram) -> Result<(), ExecutionFault>;

    /// Tear the execution environment down once the outcome is known. Called
    /// once, after the status line (if any) has been written.
    fn shutdown(&self) {}
}

pub mod python;

pub use python::EmbeddedPythonExecutor;
