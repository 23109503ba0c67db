//! Compile-time build and platform facts.
//!
//! `gather` is the boundary: the date is the only runtime query, everything
//! else is resolved by the compiler. The returned struct has no conditional
//! fields; rendering is pure.

use std::env::consts;
use std::fmt::Write;

use sysprobe_types::report;

/// Build and platform facts gathered once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub date: String,
    pub os: &'static str,
    pub arch: &'static str,
    pub family: &'static str,
    pub pointer_width: &'static str,
    pub endianness: &'static str,
    pub package_version: &'static str,
    pub profile: &'static str,
}

impl BuildReport {
    /// Gathers build facts. All fallbacks are resolved here.
    #[must_use]
    pub fn gather() -> Self {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();

        Self {
            date,
            os: consts::OS,
            arch: consts::ARCH,
            family: consts::FAMILY,
            pointer_width: if cfg!(target_pointer_width = "64") {
                "64-bit"
            } else {
                "32-bit"
            },
            endianness: if cfg!(target_endian = "little") {
                "little-endian"
            } else {
                "big-endian"
            },
            package_version: env!("CARGO_PKG_VERSION"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
        }
    }

    /// Renders the report section. Pure; all inputs come from `self`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut buf = String::with_capacity(240);
        let _ = writeln!(buf, "Build environment:");
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Package version: {}", self.package_version))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Date: {}", self.date))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!(
                "Target: {} {} ({})",
                self.os, self.arch, self.family
            ))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!(
                "Layout: {}, {}",
                self.pointer_width, self.endianness
            ))
        );
        let _ = writeln!(
            buf,
            "{}",
            report::status_line(&format!("Profile: {}", self.profile))
        );
        buf
    }
}
