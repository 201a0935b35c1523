//! Collection-level transforms: NaN substitution and top-N ranking.
//!
//! ## Purpose
//!
//! This module implements the policies applied to smoothed entity series
//! before they are handed back to the caller: substituting non-finite
//! smoothed values, and selecting the N entities with the largest most
//! recent cumulative total.
//!
//! ## Design notes
//!
//! * **Caller-side NaN policy**: The smoothing core emits NaN where its
//!   normalizing denominator degenerates and never substitutes on its own;
//!   zero-fill is the consuming pipeline's convention and lives here.
//! * **Raw ranking key**: Entities are ranked by the last cumulative total,
//!   not the smoothed daily values, so smoothing artifacts cannot reorder
//!   the leaderboard.
//! * **Total-order safe**: Comparisons fall back to `Ordering::Equal` for
//!   incomparable (NaN) keys; series without samples rank last.
//!
//! ## Non-goals
//!
//! * This module does not smooth and does not derive increments.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::pipeline::series::SmoothedSeries;

// ============================================================================
// NaN Policy
// ============================================================================

/// Policy for non-finite smoothed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Replace NaN smoothed values with zero.
    #[default]
    ZeroFill,

    /// Leave NaN smoothed values in place.
    Propagate,
}

/// Replace NaN elements with zero, in place.
pub fn fill_nan<T: Float>(values: &mut [T]) {
    for v in values.iter_mut() {
        if v.is_nan() {
            *v = T::zero();
        }
    }
}

// ============================================================================
// Top-N Ranking
// ============================================================================

/// Sort series descending by most recent cumulative total and keep the
/// first `n`.
///
/// Empty series sort after non-empty ones; NaN keys compare as equal.
pub fn rank_top_n<T: Float>(series: &mut Vec<SmoothedSeries<T>>, n: usize) {
    series.sort_by(|a, b| match (a.latest_total(), b.latest_total()) {
        (Some(ka), Some(kb)) => kb.partial_cmp(&ka).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    series.truncate(n);
}
