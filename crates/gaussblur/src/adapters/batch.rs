//! Batch adapter for smoothing a single sequence.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: it smooths one complete
//! in-memory sequence of samples and returns the smoothed values together
//! with the run parameters.
//!
//! ## Design notes
//!
//! * **Builder Pattern**: Fluent configuration with the observed defaults
//!   (bandwidth 10, precision 1e-6, single pass).
//! * **Build-time validation**: `build()` runs all `Validator` checks, so
//!   `fit` is infallible — the smoothing contract never raises for in-range
//!   input, including the empty sequence.
//! * **Delegation**: Computation is delegated to the execution engine.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * The input slice is never mutated.
//!
//! ## Non-goals
//!
//! * This adapter does not substitute non-finite outputs (use the
//!   Collection adapter's NaN policy, or post-process).
//! * This adapter does not handle streaming data.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{BlurConfig, BlurExecutor};
use crate::engine::output::BlurResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::BlurError;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch smoother.
#[derive(Debug, Clone)]
pub struct BatchBlurBuilder<T: Float> {
    /// Kernel bandwidth.
    pub bandwidth: T,

    /// Precision threshold bounding the kernel support.
    pub precision: T,

    /// Number of smoothing passes.
    pub passes: usize,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchBlurBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchBlurBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            bandwidth: T::from(10.0).unwrap(),
            precision: T::from(1e-6).unwrap(),
            passes: 1,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the kernel bandwidth.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set the precision threshold.
    pub fn precision(mut self, precision: T) -> Self {
        self.precision = precision;
        self
    }

    /// Set the number of smoothing passes.
    pub fn passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch smoother.
    pub fn build(self) -> Result<BatchBlur<T>, BlurError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_bandwidth(self.bandwidth)?;
        Validator::validate_precision(self.precision)?;
        Validator::validate_passes(self.passes)?;

        Ok(BatchBlur { config: self })
    }
}

// ============================================================================
// Batch Processor
// ============================================================================

/// Batch smoother over a single sequence.
#[derive(Debug, Clone)]
pub struct BatchBlur<T: Float> {
    config: BatchBlurBuilder<T>,
}

impl<T: Float> BatchBlur<T> {
    /// Smooth the provided samples.
    pub fn fit(&self, samples: &[T]) -> BlurResult<T> {
        let config = BlurConfig {
            bandwidth: self.config.bandwidth,
            precision: self.config.precision,
            passes: self.config.passes,
        };

        let output = BlurExecutor::run(samples, &config);

        BlurResult {
            smoothed: output.smoothed,
            bandwidth_used: self.config.bandwidth,
            radius_used: output.radius,
            passes_used: self.config.passes,
        }
    }
}
