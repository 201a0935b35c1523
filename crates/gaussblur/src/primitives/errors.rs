//! Error types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a smoother: invalid bandwidth, precision, pass count, or ranking limit,
//! and duplicate builder parameters.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value.
//! * **Deferred**: Errors are caught and stored during builder configuration
//!   and surfaced when `build()` is called.
//! * **No-std**: All payloads are plain scalars, so the type works without
//!   `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Parameter validation**: Bandwidth, precision, and pass count bounds.
//! 2. **Ranking constraints**: A top-N limit of zero would discard everything.
//! 3. **Builder hygiene**: Each parameter may only be configured once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoother configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlurError {
    /// Bandwidth must be finite and strictly positive; the kernel rate is
    /// `2 / bandwidth` and diverges otherwise.
    InvalidBandwidth(f64),

    /// Precision threshold must be strictly between 0 and 1.
    InvalidPrecision(f64),

    /// Pass count must be at least 1 and at most 1000.
    InvalidPasses(usize),

    /// Top-N ranking limit must be at least 1.
    InvalidTopN(usize),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for BlurError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidBandwidth(bw) => {
                write!(f, "Invalid bandwidth: {bw} (must be finite and > 0)")
            }
            Self::InvalidPrecision(p) => {
                write!(f, "Invalid precision: {p} (must be > 0 and < 1)")
            }
            Self::InvalidPasses(passes) => {
                write!(f, "Invalid passes: {passes} (must be in [1, 1000])")
            }
            Self::InvalidTopN(n) => {
                write!(f, "Invalid top-N limit: {n} (must be at least 1)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for BlurError {}
