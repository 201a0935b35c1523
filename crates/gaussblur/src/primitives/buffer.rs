//! Accumulator buffers for the kernel convolution.
//!
//! ## Purpose
//!
//! This module provides the reusable working memory for the smoothing
//! executor: the weighted-sum and weight-total accumulators, pre-sized to
//! the input length and recycled across passes so a multi-pass smooth
//! allocates once.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: `BlurBuffer` holds all scratch space the
//!   executor needs.
//! * **Fixed-size numeric kernel**: The accumulators are plain pre-sized
//!   vectors, not growable collections; `prepare` zero-fills in place.
//! * **Lazy Expansion**: Capacity only grows, never shrinks, stabilizing at
//!   the largest sequence seen.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector wrapper with capacity-preserving reset.
//! * **BlurBuffer**: The pair of accumulator slots the convolution writes into.
//!
//! ## Invariants
//!
//! * After `prepare(n)`, both accumulators have length `n` and every element
//!   is zero.
//! * Capacity is monotonically increasing between calls.
//!
//! ## Non-goals
//!
//! * Thread-local caching (parallel callers hold one buffer per worker).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Zero;

// ============================================================================
// Slot - Reusable Vector Abstraction
// ============================================================================

/// A reusable vector slot with capacity-preserving reset.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Helper trait to simplify resizing and filling vectors.
pub trait VecExt<T> {
    /// Resize the vector to `n` and fill with `val`.
    fn assign(&mut self, n: usize, val: T);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign(&mut self, n: usize, val: T) {
        if self.len() != n {
            self.clear();
            self.resize(n, val);
        } else {
            self.fill(val);
        }
    }
}

// ============================================================================
// BlurBuffer - Working Memory for the Executor
// ============================================================================

/// Working memory for the smoothing executor.
///
/// Holds the two accumulator sequences of the kernel convolution: the
/// per-index weighted sum of contributing samples, and the per-index total
/// of the weights that contributed there.
#[derive(Debug, Clone)]
pub struct BlurBuffer<T> {
    /// Per-index weighted sum of contributing samples.
    pub weighted_sum: Slot<T>,

    /// Per-index total of contributing kernel weights.
    pub weight_total: Slot<T>,
}

impl<T> Default for BlurBuffer<T> {
    fn default() -> Self {
        Self {
            weighted_sum: Slot::default(),
            weight_total: Slot::default(),
        }
    }
}

impl<T: Clone + Zero> BlurBuffer<T> {
    /// Create a buffer pre-allocated for `n` samples.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            weighted_sum: Slot::new(n),
            weight_total: Slot::new(n),
        }
    }

    /// Prepare the accumulators for a sequence of length `n`.
    ///
    /// Both slots end up with length `n` and all elements zeroed, reusing
    /// existing capacity where possible.
    pub fn prepare(&mut self, n: usize) {
        self.weighted_sum.as_vec_mut().assign(n, T::zero());
        self.weight_total.as_vec_mut().assign(n, T::zero());
    }
}
