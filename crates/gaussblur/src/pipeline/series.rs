//! Entity series types and daily-increment derivation.
//!
//! ## Purpose
//!
//! This module defines the per-entity time-series shapes the collection
//! pipeline works with: a raw `Series` of cumulative totals keyed by entity
//! name, and the `SmoothedSeries` produced from it, which carries both the
//! original totals (the ranking key) and the smoothed daily values (the
//! plotted curve).
//!
//! ## Design notes
//!
//! * **Totals vs. increments**: Entities report cumulative totals; what gets
//!   smoothed is the derived day-over-day increment sequence. Negative
//!   increments (reporting corrections) are clamped to zero.
//! * **Metadata travels with values**: Name and optional short code stay
//!   attached through the pipeline so downstream consumers can label output.
//!
//! ## Invariants
//!
//! * `daily_increments` output has the same length as its input, and every
//!   finite element is non-negative.
//! * The first increment is zero: the running previous value is seeded from
//!   the first total.
//!
//! ## Non-goals
//!
//! * This module does not fetch or parse tabular data.
//! * This module does not smooth; it only prepares inputs and holds outputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Series Types
// ============================================================================

/// One entity's raw time series of cumulative totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    /// Entity name (e.g., country name).
    pub name: String,

    /// Optional short code for the entity (e.g., ISO country code).
    pub code: Option<String>,

    /// Cumulative totals at equally-spaced observation points.
    pub totals: Vec<T>,
}

impl<T> Series<T> {
    /// Create a series from a name and cumulative totals.
    pub fn new(name: impl Into<String>, totals: Vec<T>) -> Self {
        Self {
            name: name.into(),
            code: None,
            totals,
        }
    }

    /// Attach a short code to the series.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// One entity's series after smoothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSeries<T> {
    /// Entity name.
    pub name: String,

    /// Optional short code for the entity.
    pub code: Option<String>,

    /// Original cumulative totals, unchanged.
    pub totals: Vec<T>,

    /// Smoothed daily increments, same length as `totals`.
    pub daily: Vec<T>,
}

impl<T: Float> SmoothedSeries<T> {
    /// Most recent cumulative total, if the series has any samples.
    ///
    /// This is the ranking key for top-N truncation.
    pub fn latest_total(&self) -> Option<T> {
        self.totals.last().copied()
    }
}

// ============================================================================
// Daily Increments
// ============================================================================

/// Derive day-over-day increments from cumulative totals.
///
/// The running previous value is seeded from the first total, so the first
/// increment is zero. Negative increments are clamped to zero; NaN deltas
/// are preserved for the pipeline's NaN policy to handle after smoothing.
pub fn daily_increments<T: Float>(totals: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(totals.len());
    let mut previous = match totals.first() {
        Some(&first) => first,
        None => return out,
    };

    for &total in totals {
        let delta = total - previous;
        out.push(if delta < T::zero() { T::zero() } else { delta });
        previous = total;
    }

    out
}
