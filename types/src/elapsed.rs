//! Wall-clock span measured by a probe.

use std::fmt;
use std::time::Duration;

/// Elapsed wall-clock time for one probe section.
///
/// Wraps [`Duration`] so report code renders spans uniformly: probe
/// sections report whole microseconds, the run summary reports whole
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Elapsed(Duration);

impl Elapsed {
    #[must_use]
    pub const fn new(span: Duration) -> Self {
        Self(span)
    }

    /// Fixed-value constructor used by rendering tests.
    #[must_use]
    pub const fn from_micros(micros: u64) -> Self {
        Self(Duration::from_micros(micros))
    }

    #[must_use]
    pub const fn as_micros(self) -> u128 {
        self.0.as_micros()
    }

    #[must_use]
    pub const fn as_millis(self) -> u128 {
        self.0.as_millis()
    }
}

impl From<Duration> for Elapsed {
    fn from(span: Duration) -> Self {
        Self(span)
    }
}

impl fmt::Display for Elapsed {
    /// Renders as whole microseconds, the unit probe sections report in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} µs", self.0.as_micros())
    }
}
