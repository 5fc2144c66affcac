//! The submitted program and its capture from the input stream

use crate::errors::RunnerError;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Program text exactly as it arrived on the input channel.
///
/// Kept as raw bytes: decoding belongs to execution, so text that is not
/// valid in the source encoding is reported like any other program fault.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedProgram {
    source: Vec<u8>,
}

impl SubmittedProgram {
    pub fn new(source: impl Into<Vec<u8>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

/// Read `input` until end-of-stream. No size limit is applied.
pub async fn capture_program<R>(mut input: R) -> Result<SubmittedProgram, RunnerError>
where
    R: AsyncRead + Unpin,
{
    let mut source = Vec::new();
    input
        .read_to_end(&mut source)
        .await
        .map_err(RunnerError::Input)?;

    log::debug!("Captured program of {} bytes", source.len());
    Ok(SubmittedProgram::new(source))
}
