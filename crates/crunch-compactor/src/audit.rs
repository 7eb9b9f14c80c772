//! Size auditor — packaged artifact size against a hard byte budget.
//!
//! Advisory only: a report never blocks writing output.

use crunch_core::Result;
use std::fmt;
use std::path::Path;

pub use crunch_core::DEFAULT_MAX_BYTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub size: u64,
    pub max: u64,
}

impl SizeReport {
    /// Share of the budget used, in percent.
    pub fn percent(&self) -> f64 {
        if self.max == 0 {
            return if self.size == 0 { 0.0 } else { f64::INFINITY };
        }
        self.size as f64 * 100.0 / self.max as f64
    }

    /// Bytes left; negative when over budget.
    pub fn remaining(&self) -> i64 {
        self.max as i64 - self.size as i64
    }

    pub fn is_over(&self) -> bool {
        self.size > self.max
    }

    /// Emit the report through `tracing`, as a warning when over budget.
    pub fn log(&self) {
        if self.is_over() {
            tracing::warn!(size = self.size, max = self.max, "size is greater than allowed: {}", self);
        } else {
            tracing::info!(size = self.size, max = self.max, "package size: {}", self);
        }
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pct = self.percent().round();
        let remaining = self.remaining();
        if remaining >= 0 {
            write!(f, "{} bytes ({pct}% of max size, {remaining} bytes remaining)", self.size)
        } else {
            write!(f, "{} bytes ({pct}% of max size, {} bytes over)", self.size, -remaining)
        }
    }
}

pub fn audit(size: u64, max: u64) -> SizeReport {
    SizeReport { size, max }
}

/// Audit the file at `path`.
pub fn audit_file(path: impl AsRef<Path>, max: u64) -> Result<SizeReport> {
    let size = std::fs::metadata(path.as_ref())?.len();
    Ok(audit(size, max))
}
