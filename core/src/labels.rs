//! Fixed label-list ordering probe.
//!
//! Sorts a short fixed list of language names by length, boxes one integer
//! to exercise a single heap allocation, and counts names above the length
//! threshold.

use std::fmt::Write;

use sysprobe_types::report;

/// The fixed label list, in source order.
pub const LANGUAGES: [&str; 6] = ["Rust", "Go", "Python", "Kotlin", "TypeScript", "C++"];

/// Labels longer than this count as long names.
pub const LONG_NAME_THRESHOLD: usize = 5;

/// Value carried by the boxed-allocation check.
const BOXED_PROBE_VALUE: i32 = 42;

/// Facts from one ordering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingReport {
    /// Labels in non-decreasing length order. The sort is stable, so equal
    /// lengths keep source order.
    pub ordered: Vec<&'static str>,
    pub boxed_value: i32,
    pub long_names: usize,
}

/// Runs the ordering probe over [`LANGUAGES`].
#[must_use]
pub fn survey() -> OrderingReport {
    let mut ordered = LANGUAGES.to_vec();
    ordered.sort_by_key(|label| label.len());

    let boxed = Box::new(BOXED_PROBE_VALUE);

    let long_names = LANGUAGES
        .iter()
        .filter(|label| label.len() > LONG_NAME_THRESHOLD)
        .count();

    OrderingReport {
        ordered,
        boxed_value: *boxed,
        long_names,
    }
}

impl OrderingReport {
    /// Renders the report section. Pure; all inputs come from `self`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = String::with_capacity(320);
        let _ = writeln!(buf, "Label ordering:");
        let _ = writeln!(buf, "{}Languages sorted by length:", report::DETAIL_INDENT);
        for label in &self.ordered {
            let _ = writeln!(
                buf,
                "{}  - {label} ({} chars)",
                report::DETAIL_INDENT,
                label.len()
            );
        }
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Boxed probe value: {}", self.boxed_value))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!(
                "Languages with >{LONG_NAME_THRESHOLD} chars: {}",
                self.long_names
            ))
        );
        buf
    }
}
