//! Timed reduction, transform, and extrema probe.
//!
//! Runs sum, partial product, element-wise squaring, and min/max over a
//! fixed sample sequence inside one timed span. The squares are routed
//! through `black_box` so the transform survives optimization even though
//! the report never prints it.

use std::fmt::Write;
use std::hint::black_box;

use sysprobe_types::{Elapsed, ProbeError, report};

use crate::stopwatch::Stopwatch;

/// Elements in the sample sequence.
pub const SAMPLE_COUNT: usize = 100_000;

/// Samples feeding the partial product.
pub const PRODUCT_PREFIX: usize = 10;

/// Facts from one compute run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputeReport {
    pub samples: usize,
    pub sum: i64,
    pub product_prefix: i64,
    pub min: i32,
    pub max: i32,
    pub elapsed: Elapsed,
}

/// Runs the compute probe over the sequence `1..=samples`.
pub fn measure(samples: usize) -> Result<ComputeReport, ProbeError> {
    if samples == 0 {
        return Err(ProbeError::EmptySamples);
    }
    let numbers: Vec<i32> = (1..=samples).map(|value| value as i32).collect();

    let watch = Stopwatch::start();

    let sum: i64 = numbers.iter().map(|&value| i64::from(value)).sum();
    let product_prefix = prefix_product(&numbers, PRODUCT_PREFIX)?;

    // Squares above 46340 wrap; the probe times the transform, it does not
    // publish the values.
    let mut squares = vec![0i32; numbers.len()];
    for (slot, &value) in squares.iter_mut().zip(&numbers) {
        *slot = value.wrapping_mul(value);
    }
    black_box(&squares);

    let min = *numbers.iter().min().ok_or(ProbeError::EmptySamples)?;
    let max = *numbers.iter().max().ok_or(ProbeError::EmptySamples)?;

    let elapsed = watch.elapsed();

    let probe = ComputeReport {
        samples: numbers.len(),
        sum,
        product_prefix,
        min,
        max,
        elapsed,
    };
    tracing::debug!(
        samples = probe.samples,
        micros = probe.elapsed.as_micros() as u64,
        "compute probe complete"
    );
    Ok(probe)
}

/// Product of the first `upto` samples, checked against `i64` overflow.
fn prefix_product(numbers: &[i32], upto: usize) -> Result<i64, ProbeError> {
    let mut product = 1_i64;
    for &value in numbers.iter().take(upto) {
        product = product
            .checked_mul(i64::from(value))
            .ok_or(ProbeError::ProductOverflow { upto })?;
    }
    Ok(product)
}

impl ComputeReport {
    /// Renders the report section. Pure; all inputs come from `self`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = String::with_capacity(240);
        let _ = writeln!(buf, "Compute throughput:");
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Processed {} samples", self.samples))
        );
        let _ = writeln!(buf, "{}", report::status_line(&format!("Sum: {}", self.sum)));
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!(
                "Product (first {PRODUCT_PREFIX}): {}",
                self.product_prefix
            ))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Max: {}, Min: {}", self.max, self.min))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Computation time: {}", self.elapsed))
        );
        buf
    }
}
