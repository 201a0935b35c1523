//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing computation:
//! - Fail-fast validation of configuration parameters
//! - The kernel-convolution executor (accumulate, normalize, repeat per pass)
//! - Output types carrying the smoothed values plus run metadata
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Pipeline
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Configuration validation.
pub mod validator;

/// Kernel-convolution execution.
pub mod executor;

/// Output types.
pub mod output;
