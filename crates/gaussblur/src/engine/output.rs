//! Output types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines `BlurResult`, the public result of a batch smoothing
//! run: the smoothed values plus the parameters the run actually used.
//!
//! ## Design notes
//!
//! * **Observable runs**: Instead of logging, the result carries run
//!   metadata (bandwidth, kernel radius, passes) for callers to inspect.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `smoothed` has the same length as the input sequence.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Result of a batch smoothing run.
#[derive(Debug, Clone, PartialEq)]
pub struct BlurResult<T> {
    /// Smoothed values, same length as the input sequence.
    pub smoothed: Vec<T>,

    /// Bandwidth the kernel was built with.
    pub bandwidth_used: T,

    /// Kernel support radius in index steps; depends on bandwidth and
    /// precision, not on sequence length.
    pub radius_used: usize,

    /// Number of smoothing passes performed.
    pub passes_used: usize,
}

impl<T: Float> BlurResult<T> {
    /// Number of samples in the smoothed sequence.
    pub fn len(&self) -> usize {
        self.smoothed.len()
    }

    /// Whether the smoothed sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for BlurResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples:   {}", self.smoothed.len())?;
        writeln!(f, "  Bandwidth: {}", self.bandwidth_used)?;
        writeln!(f, "  Radius:    {}", self.radius_used)?;
        writeln!(f, "  Passes:    {}", self.passes_used)?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "{:>8} {:>14}", "Index", "Smoothed")?;
        writeln!(f, "{:-<width$}", "", width = 23)?;

        // Show first 10 and last 10 if more than 20 samples.
        let n = self.smoothed.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>8} {:>14.6}", idx, self.smoothed[idx])?;
        }

        Ok(())
    }
}
