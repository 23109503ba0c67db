//! Closing run summary.

use std::fmt::Write;

use sysprobe_types::{Elapsed, report};

/// Fixed toolchain facts printed in every summary.
const FACTS: [&str; 6] = [
    "Language: Rust (edition 2024)",
    "Build system: Cargo",
    "Standard library: std",
    "Memory management: ownership + RAII",
    "Error handling: Result propagation",
    "Paradigm: multi-paradigm (generic, functional, imperative)",
];

/// Closing line confirming a clean run.
const CLOSING: &str = "Host probe completed successfully.";

/// Total wall-clock span for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: Elapsed,
}

impl RunSummary {
    /// Renders the summary. Unlike probe sections, summary lines carry the
    /// badge without the detail indent.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = String::with_capacity(400);
        let _ = writeln!(buf, "Run summary:");
        let _ = writeln!(buf, "{}", report::rule('-', report::SUMMARY_RULE_WIDTH));
        for fact in FACTS {
            let _ = writeln!(buf, "{} {fact}", report::OK_BADGE);
        }
        let _ = writeln!(
            buf,
            "{} Total execution time: {} ms",
            report::OK_BADGE,
            self.total.as_millis()
        );
        let _ = writeln!(buf);
        let _ = writeln!(buf, "{CLOSING}");
        buf
    }
}
