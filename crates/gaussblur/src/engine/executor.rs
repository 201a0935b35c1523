//! Execution engine for kernel smoothing.
//!
//! ## Purpose
//!
//! This module implements the core convolution: each output value is the
//! kernel-weighted average of the input sample at the same index and its
//! neighbors, with weights falling off as a Gaussian of index distance and
//! the expansion bounded by the kernel's precision-derived support radius.
//!
//! ## Design notes
//!
//! * **Bounded expansion**: The distance loop runs `d = 0..=radius` with the
//!   radius computed analytically from bandwidth and precision, so
//!   termination is structural, not a runtime convergence check. The single
//!   at-or-below-threshold distance is included, matching the reference
//!   post-check loop exactly.
//! * **Symmetric accumulation**: At each distance, sample `i` contributes
//!   forward to `i + d` and, for `d != 0`, backward to `i - d`; skipping the
//!   backward leg at `d = 0` avoids double-counting the center weight.
//! * **Normalized averages**: Dividing by the accumulated weight total makes
//!   each output a convex combination of inputs, so boundary indices with
//!   fewer neighbors are still correctly normalized.
//! * **Buffer recycling**: Multi-pass smoothing ping-pongs between two
//!   vectors and reuses one accumulator buffer across passes.
//!
//! ## Key concepts
//!
//! * **Pass**: One full accumulate-and-normalize sweep; pass `k + 1`
//!   consumes pass `k`'s output.
//! * **Radius**: The largest distance whose weight is applied; grows with
//!   bandwidth, independent of sequence length.
//!
//! ## Invariants
//!
//! * Output length always equals input length.
//! * Zero-length input returns immediately with zero-length output.
//! * Every in-range index receives the `d = 0` contribution of weight 1, so
//!   the normalizing denominator is at least 1 for non-empty input.
//! * The input sequence is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `Validator`).
//! * This module does not substitute non-finite outputs (pipeline policy).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::mem::swap;
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::GaussianKernel;
use crate::primitives::buffer::BlurBuffer;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a smoothing run.
///
/// Values are assumed to have passed `Validator` checks; the adapters
/// guarantee this before constructing an executor call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurConfig<T> {
    /// Kernel bandwidth; larger means a wider kernel and smoother output.
    pub bandwidth: T,

    /// Weight threshold at which kernel expansion stops.
    pub precision: T,

    /// Number of smoothing passes applied back to back.
    pub passes: usize,
}

impl<T: Float> Default for BlurConfig<T> {
    fn default() -> Self {
        Self {
            bandwidth: T::from(10.0).unwrap(),
            precision: T::from(1e-6).unwrap(),
            passes: 1,
        }
    }
}

// ============================================================================
// Executor Output
// ============================================================================

/// Output from a smoothing run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Smoothed values, same length as the input.
    pub smoothed: Vec<T>,

    /// Support radius used: the number of distance steps past the center.
    pub radius: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Kernel smoothing executor.
pub struct BlurExecutor;

impl BlurExecutor {
    /// Smooth `samples` according to `config`.
    ///
    /// Pure over its inputs: allocates fresh output storage and never
    /// mutates `samples`.
    pub fn run<T: Float>(samples: &[T], config: &BlurConfig<T>) -> ExecutorOutput<T> {
        let kernel = GaussianKernel::new(config.bandwidth);
        let radius = kernel.support_radius(config.precision);

        let n = samples.len();
        let mut current: Vec<T> = samples.to_vec();
        if n == 0 {
            return ExecutorOutput {
                smoothed: current,
                radius,
            };
        }

        let mut next: Vec<T> = Vec::with_capacity(n);
        let mut buffer = BlurBuffer::with_capacity(n);

        for _ in 0..config.passes {
            next.clear();
            kernel_pass(&current, &kernel, radius, &mut buffer, &mut next);
            swap(&mut current, &mut next);
        }

        ExecutorOutput {
            smoothed: current,
            radius,
        }
    }
}

/// One accumulate-and-normalize sweep over `input`, appending to `output`.
fn kernel_pass<T: Float>(
    input: &[T],
    kernel: &GaussianKernel<T>,
    radius: usize,
    buffer: &mut BlurBuffer<T>,
    output: &mut Vec<T>,
) {
    let n = input.len();
    buffer.prepare(n);

    let BlurBuffer {
        weighted_sum,
        weight_total,
    } = buffer;

    for d in 0..=radius {
        let p = kernel.weight(d);

        // Forward leg: sample i reaches d positions ahead.
        for i in 0..n.saturating_sub(d) {
            weighted_sum[i + d] = weighted_sum[i + d] + p * input[i];
            weight_total[i + d] = weight_total[i + d] + p;
        }

        // Backward leg: sample i reaches d positions behind (d = 0 already
        // contributed above).
        if d != 0 {
            for i in d..n {
                weighted_sum[i - d] = weighted_sum[i - d] + p * input[i];
                weight_total[i - d] = weight_total[i - d] + p;
            }
        }
    }

    for i in 0..n {
        output.push(weighted_sum[i] / weight_total[i]);
    }
}
