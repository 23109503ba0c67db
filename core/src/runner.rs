//! Fixed probe sequence.
//!
//! The runner owns the run-wide stopwatch and writes each section to the
//! supplied sink as it completes. Rendering is pure; the sink is the only
//! I/O in the crate.

use std::io::Write;

use sysprobe_types::report;

use crate::alloc;
use crate::compute;
use crate::errors::RunError;
use crate::labels;
use crate::platform::BuildReport;
use crate::stopwatch::Stopwatch;
use crate::summary::RunSummary;

/// Heading printed above the report.
const BANNER: &str = "sysprobe host toolchain report";

/// Executes the probe sequence and writes the report.
///
/// The stopwatch starts at construction, so the closing summary covers the
/// whole run, banner included.
pub struct Runner {
    watch: Stopwatch,
}

impl Runner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            watch: Stopwatch::start(),
        }
    }

    /// Runs every probe in fixed order, writing each section to `out` as it
    /// completes. The first failure aborts the sequence.
    pub fn run(&self, out: &mut dyn Write) -> Result<(), RunError> {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "{}", report::rule('=', report::BANNER_RULE_WIDTH))?;

        let allocation = alloc::measure(alloc::ALLOC_ELEMENTS);
        writeln!(out)?;
        out.write_all(allocation.render().as_bytes())?;

        let computed = compute::measure(compute::SAMPLE_COUNT)?;
        writeln!(out)?;
        out.write_all(computed.render().as_bytes())?;

        let ordering = labels::survey();
        writeln!(out)?;
        out.write_all(ordering.render().as_bytes())?;

        let build = BuildReport::gather();
        writeln!(out)?;
        out.write_all(build.render().as_bytes())?;

        let summary = RunSummary {
            total: self.watch.elapsed(),
        };
        writeln!(out)?;
        out.write_all(summary.render().as_bytes())?;

        tracing::info!(
            total_ms = summary.total.as_millis() as u64,
            "probe sequence complete"
        );
        Ok(())
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}
