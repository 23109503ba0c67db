//! Snapshot tests for report rendering with fixed inputs.
//!
//! Timings are injected, never measured, so every snapshot here is
//! deterministic. The platform section is excluded: its fields depend on
//! the build target and are covered by property tests instead.

use insta::assert_snapshot;

use sysprobe_core::alloc::AllocationReport;
use sysprobe_core::compute::ComputeReport;
use sysprobe_core::labels;
use sysprobe_core::summary::RunSummary;
use sysprobe_types::{Elapsed, Footprint};

#[test]
fn allocation_section() {
    let section = AllocationReport {
        elements: 1_000_000,
        elapsed: Elapsed::from_micros(2_134),
        footprint: Footprint::of_elements::<i32>(1_000_000),
    }
    .render();

    assert_snapshot!(section.trim_end(), @r"
Memory allocation:
   [OK] Allocated vector of 1000000 integers
   [OK] Fill time: 2134 µs
   [OK] Approximate footprint: 3 MiB
");
}

#[test]
fn compute_section() {
    let section = ComputeReport {
        samples: 100_000,
        sum: 5_000_050_000,
        product_prefix: 3_628_800,
        min: 1,
        max: 100_000,
        elapsed: Elapsed::from_micros(812),
    }
    .render();

    assert_snapshot!(section.trim_end(), @r"
Compute throughput:
   [OK] Processed 100000 samples
   [OK] Sum: 5000050000
   [OK] Product (first 10): 3628800
   [OK] Max: 100000, Min: 1
   [OK] Computation time: 812 µs
");
}

#[test]
fn ordering_section() {
    let section = labels::survey().render();

    assert_snapshot!(section.trim_end(), @r"
Label ordering:
   Languages sorted by length:
     - Go (2 chars)
     - C++ (3 chars)
     - Rust (4 chars)
     - Python (6 chars)
     - Kotlin (6 chars)
     - TypeScript (10 chars)
   [OK] Boxed probe value: 42
   [OK] Languages with >5 chars: 3
");
}

#[test]
fn summary_section() {
    let section = RunSummary {
        total: Elapsed::from_micros(12_400),
    }
    .render();

    assert_snapshot!(section.trim_end(), @r"
Run summary:
------------------------------
[OK] Language: Rust (edition 2024)
[OK] Build system: Cargo
[OK] Standard library: std
[OK] Memory management: ownership + RAII
[OK] Error handling: Result propagation
[OK] Paradigm: multi-paradigm (generic, functional, imperative)
[OK] Total execution time: 12 ms

Host probe completed successfully.
");
}
