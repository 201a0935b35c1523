//! Gaussian kernel over integer index distances.
//!
//! ## Purpose
//!
//! This module defines the weight function applied during smoothing. It maps
//! a non-negative integer distance `d` between sequence indices to a weight
//! in (0, 1] that falls off as a Gaussian of the distance:
//!
//! ```text
//! w(d) = exp(-(rate * d)^2)        rate = 2 / bandwidth
//! ```
//!
//! ## Design notes
//!
//! * **Unnormalized**: `w(0) = 1`; the executor normalizes by the total
//!   weight accumulated per index, so no kernel integral is needed here.
//! * **Unbounded support, bounded evaluation**: The Gaussian never reaches
//!   zero, so the effective support is cut off where the weight drops to a
//!   precision threshold. The crossing distance is computed analytically
//!   rather than discovered by open-ended iteration, which makes loop
//!   termination provable.
//! * **Generics**: Generic over `Float` so `f32` and `f64` both work;
//!   callers wanting the contract's double-precision semantics use `f64`.
//!
//! ## Invariants
//!
//! * `weight(0) == 1` for any valid bandwidth.
//! * Weights are strictly decreasing in `d` (strictly positive rate).
//! * `weight(support_radius(p)) <= p < weight(support_radius(p) - 1)` for
//!   any precision `p` in (0, 1) (first inequality also holds at radius 0).
//!
//! ## Non-goals
//!
//! * This module does not perform weight normalization.
//! * This module does not validate bandwidth or precision (see `Validator`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Gaussian weight function of integer index distance.
///
/// Construction assumes a validated bandwidth (finite, strictly positive);
/// the builder layer enforces this before a kernel is ever built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianKernel<T> {
    /// Decay rate of the kernel, `2 / bandwidth`.
    rate: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Create a kernel for the given bandwidth.
    #[inline]
    pub fn new(bandwidth: T) -> Self {
        Self {
            rate: T::from(2.0).unwrap() / bandwidth,
        }
    }

    /// The decay rate `2 / bandwidth`.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Compute the unnormalized weight at integer distance `d`.
    #[inline]
    pub fn weight(&self, d: usize) -> T {
        let u = self.rate * T::from(d).unwrap();
        (-(u * u)).exp()
    }

    /// Smallest integer distance whose weight is at or below `precision`.
    ///
    /// Solving `exp(-(rate * d)^2) <= p` for `d` gives
    /// `d >= sqrt(-ln p) / rate`, so the crossing distance is the ceiling of
    /// that bound. Iterating `d = 0..=support_radius(p)` therefore covers
    /// every distance the matching threshold-checked loop would have
    /// visited, including the single at-or-below-threshold step it applies
    /// before stopping.
    #[inline]
    pub fn support_radius(&self, precision: T) -> usize {
        let crossing = (-precision.ln()).sqrt() / self.rate;
        crossing.ceil().to_usize().unwrap_or(usize::MAX)
    }
}
