//! Timed large-buffer allocation probe.
//!
//! Builds a pre-reserved vector by repeated append, so the measured span
//! covers the element-append path and not just the reservation, then
//! reports count, elapsed time, and approximate footprint.

use std::fmt::Write;
use std::hint::black_box;

use sysprobe_types::{Elapsed, Footprint, report};

use crate::stopwatch::Stopwatch;

/// Elements in the allocation buffer.
pub const ALLOC_ELEMENTS: usize = 1_000_000;

/// Facts from one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationReport {
    pub elements: usize,
    pub elapsed: Elapsed,
    pub footprint: Footprint,
}

/// Reserves capacity for `elements` integers, fills by append, and times
/// the whole span. The buffer is dropped before returning; only the facts
/// survive.
#[must_use]
pub fn measure(elements: usize) -> AllocationReport {
    let watch = Stopwatch::start();

    let mut numbers: Vec<i32> = Vec::with_capacity(elements);
    for value in 1..=elements {
        numbers.push(value as i32);
    }
    // black_box keeps the fill loop observable to the optimizer.
    let filled = black_box(numbers);
    let elapsed = watch.elapsed();

    let probe = AllocationReport {
        elements: filled.len(),
        elapsed,
        footprint: Footprint::of_elements::<i32>(filled.len()),
    };
    tracing::debug!(
        elements = probe.elements,
        micros = probe.elapsed.as_micros() as u64,
        "allocation probe complete"
    );
    probe
}

impl AllocationReport {
    /// Renders the report section. Pure; all inputs come from `self`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = String::with_capacity(160);
        let _ = writeln!(buf, "Memory allocation:");
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Allocated vector of {} integers", self.elements))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Fill time: {}", self.elapsed))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Approximate footprint: {}", self.footprint))
        );
        buf
    }
}
