//! sysprobe - Binary entry point.
//!
//! # Architecture
//!
//! ```text
//! main() -> init_tracing() -> Runner::new() -> run(stdout)
//!                                   |
//!                                   v
//!                     report on stdout, diagnostics on stderr
//! ```
//!
//! The process consumes no arguments or files; probe sizes and the label
//! list are fixed constants in `sysprobe-core`. `RUST_LOG` tunes diagnostic
//! verbosity only and never changes report content. Any error that escapes
//! the runner reaches the `anyhow` boundary in `main`, which prints a
//! single line to stderr and exits non-zero.

use std::io::stdout;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use sysprobe_core::Runner;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    // Diagnostics go to stderr so they never interleave with the report.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let runner = Runner::new();
    runner.run(&mut stdout().lock())?;

    Ok(())
}
