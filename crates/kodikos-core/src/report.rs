//! Outcome reporting on the protocol channel
//!
//! The caller only sees text, so the whole result of a run is collapsed into
//! one of two line shapes: the done marker on its own, or the error prefix
//! followed by the fault message. A program that prints a line matching
//! either shape will confuse the caller; nothing here guards against that.

use crate::config::ProtocolConfig;
use std::io::{self, Write};

/// What gets written as the final status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed(String),
}

/// Write the status line for `outcome` and flush `out`.
///
/// The failure message is written verbatim: embedded newlines are not
/// flattened.
pub fn report_outcome<W: Write>(
    out: &mut W,
    protocol: &ProtocolConfig,
    outcome: &Outcome,
) -> io::Result<()> {
    match outcome {
        Outcome::Completed => writeln!(out, "{}", protocol.done_marker)?,
        Outcome::Failed(message) => writeln!(out, "{}{}", protocol.error_prefix, message)?,
    }
    out.flush()
}
