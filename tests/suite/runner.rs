//! End-to-end probe sequence tests over a captured buffer.
//!
//! These are the coarse behavioral checks the tool is accountable for: the
//! run succeeds, the fixed counts and results appear in the output, and the
//! label list prints in sorted order.

use sysprobe_core::Runner;

fn run_to_string() -> String {
    let mut buf = Vec::new();
    Runner::new()
        .run(&mut buf)
        .expect("probe sequence should succeed");
    String::from_utf8(buf).expect("report is valid UTF-8")
}

#[test]
fn report_opens_with_banner_and_rule() {
    let report = run_to_string();
    let mut lines = report.lines();
    assert_eq!(lines.next(), Some("sysprobe host toolchain report"));
    assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
}

#[test]
fn report_counts_the_large_buffer() {
    let report = run_to_string();
    assert!(report.contains("Allocated vector of 1000000 integers"));
    assert!(report.contains("Approximate footprint: 3 MiB"));
}

#[test]
fn report_contains_fixed_compute_results() {
    let report = run_to_string();
    assert!(report.contains("Processed 100000 samples"));
    assert!(report.contains("Sum: 5000050000"));
    assert!(report.contains("Product (first 10): 3628800"));
    assert!(report.contains("Max: 100000, Min: 1"));
}

#[test]
fn labels_print_in_non_decreasing_length_order() {
    let report = run_to_string();
    let lengths: Vec<usize> = report
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("- "))
        .filter_map(|entry| entry.split(" (").next())
        .map(str::len)
        .collect();
    assert_eq!(lengths.len(), 6);
    assert!(lengths.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn long_name_count_matches_fixed_list() {
    let report = run_to_string();
    assert!(report.contains("Languages with >5 chars: 3"));
}

#[test]
fn build_section_reports_current_target() {
    let report = run_to_string();
    assert!(report.contains(&format!(
        "Target: {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )));
}

#[test]
fn summary_closes_the_report() {
    let report = run_to_string();
    assert!(report.contains("Total execution time:"));
    assert!(
        report
            .trim_end()
            .ends_with("Host probe completed successfully.")
    );
}
