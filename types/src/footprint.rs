//! Approximate in-memory size of a probe buffer.

use std::fmt;

/// Estimated heap footprint of a buffer: element count times element size.
///
/// The estimate ignores allocator overhead and `Vec` capacity slack; it is
/// the figure the report prints, not an accounting of real RSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    bytes: usize,
}

impl Footprint {
    #[must_use]
    pub const fn from_bytes(bytes: usize) -> Self {
        Self { bytes }
    }

    /// Footprint of `count` elements of `size_of::<T>()` bytes each.
    #[must_use]
    pub const fn of_elements<T>(count: usize) -> Self {
        Self {
            bytes: count.saturating_mul(size_of::<T>()),
        }
    }

    #[must_use]
    pub const fn bytes(self) -> usize {
        self.bytes
    }

    /// Whole mebibytes, rounded down.
    #[must_use]
    pub const fn mebibytes(self) -> usize {
        self.bytes / 1024 / 1024
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} MiB", self.mebibytes())
    }
}
