//! Input validation for smoother configuration.
//!
//! ## Purpose
//!
//! This module provides validation functions for smoother configuration
//! parameters. Sample values themselves are deliberately not validated: the
//! smoothing contract lets non-finite samples flow through the kernel
//! arithmetic, and any substitution is a pipeline-level policy.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Build-time**: All checks run when `build()` is called, so a
//!   constructed smoother can no longer fail.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Bandwidth bounds**: The kernel rate is `2 / bandwidth`; zero,
//!   negative, or non-finite bandwidths would make it diverge or go
//!   undefined, so they are rejected up front.
//! * **Precision bounds**: A threshold outside (0, 1) either never stops the
//!   kernel expansion or stops it before the center weight.
//!
//! ## Invariants
//!
//! * All validated parameters satisfy their mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter sample data.
//! * This module does not perform the smoothing itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BlurError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoother configuration.
///
/// Provides static methods returning `Result<(), BlurError>` that fail fast
/// on the first violation.
pub struct Validator;

impl Validator {
    /// Maximum number of smoothing passes accepted by the builder.
    const MAX_PASSES: usize = 1000;

    /// Validate the kernel bandwidth.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), BlurError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(BlurError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the precision threshold.
    pub fn validate_precision<T: Float>(precision: T) -> Result<(), BlurError> {
        if !precision.is_finite() || precision <= T::zero() || precision >= T::one() {
            return Err(BlurError::InvalidPrecision(
                precision.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the number of smoothing passes.
    pub fn validate_passes(passes: usize) -> Result<(), BlurError> {
        if passes == 0 || passes > Self::MAX_PASSES {
            return Err(BlurError::InvalidPasses(passes));
        }
        Ok(())
    }

    /// Validate the top-N ranking limit.
    pub fn validate_top_n(top_n: usize) -> Result<(), BlurError> {
        if top_n == 0 {
            return Err(BlurError::InvalidTopN(top_n));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), BlurError> {
        if let Some(param) = duplicate_param {
            return Err(BlurError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
