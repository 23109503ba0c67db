//! Typed failures for probe execution.

use thiserror::Error;

/// Domain failures a probe can report.
///
/// The fixed probe constants never trigger these; they exist so degenerate
/// inputs surface as errors at the top-level boundary instead of panics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// Reductions and extrema are undefined over an empty sample set.
    #[error("sample sequence is empty")]
    EmptySamples,

    /// The partial product left `i64` range.
    #[error("product of the first {upto} samples overflows i64")]
    ProductOverflow { upto: usize },
}
