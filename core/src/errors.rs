//! Runner failure type.

use std::io;

use sysprobe_types::ProbeError;
use thiserror::Error;

/// Failures that can escape the runner to the process boundary.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error("failed to write report")]
    Io(#[from] io::Error),
}
