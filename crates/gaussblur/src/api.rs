//! High-level API for Gaussian kernel smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring smoothing parameters and choosing an
//! execution adapter (Batch or Collection).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with the observed defaults for all
//!   parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter
//!   builders.
//! * **Validated**: Parameters are validated when `build()` is called on the
//!   adapter builder.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch (one sequence) and Collection (many
//!   entity series).
//! * **Configuration Flow**: Builder pattern ending in `.adapter(...)`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BlurBuilder`] via `Blur::new()`.
//! 2. Chain configuration methods (`.bandwidth()`, `.passes()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchBlurBuilder;
use crate::adapters::collection::CollectionBlurBuilder;

// Publicly re-exported types
pub use crate::adapters::batch::BatchBlur;
pub use crate::adapters::collection::CollectionBlur;
pub use crate::engine::output::BlurResult;
pub use crate::pipeline::series::{daily_increments, Series, SmoothedSeries};
pub use crate::pipeline::transform::NanPolicy;
pub use crate::primitives::errors::BlurError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Collection};
}

/// Fluent builder for configuring smoothing parameters and execution modes.
#[derive(Debug, Clone)]
pub struct BlurBuilder<T> {
    /// Kernel bandwidth; larger means more smoothing.
    pub bandwidth: Option<T>,

    /// Precision threshold bounding the kernel support.
    pub precision: Option<T>,

    /// Number of smoothing passes.
    pub passes: Option<usize>,

    /// Ranking limit (Collection only).
    pub top_n: Option<usize>,

    /// Disable ranking truncation (Collection only).
    pub keep_all: Option<bool>,

    /// Policy for non-finite smoothed values (Collection only).
    pub nan_policy: Option<NanPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BlurBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BlurBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            precision: None,
            passes: None,
            top_n: None,
            keep_all: None,
            nan_policy: None,
            duplicate_param: None,
        }
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: BlurAdapter<T>,
    {
        A::convert(self)
    }

    /// Set the kernel bandwidth.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the precision threshold at which kernel expansion stops.
    pub fn precision(mut self, precision: T) -> Self {
        if self.precision.is_some() {
            self.duplicate_param = Some("precision");
        }
        self.precision = Some(precision);
        self
    }

    /// Set the number of smoothing passes.
    pub fn passes(mut self, passes: usize) -> Self {
        if self.passes.is_some() {
            self.duplicate_param = Some("passes");
        }
        self.passes = Some(passes);
        self
    }

    /// Keep only the `n` top-ranked series (Collection only).
    pub fn top_n(mut self, n: usize) -> Self {
        if self.top_n.is_some() || self.keep_all.is_some() {
            self.duplicate_param = Some("top_n");
        }
        self.top_n = Some(n);
        self
    }

    /// Keep every series, ranked but untruncated (Collection only).
    pub fn keep_all(mut self) -> Self {
        if self.top_n.is_some() || self.keep_all.is_some() {
            self.duplicate_param = Some("top_n");
        }
        self.keep_all = Some(true);
        self
    }

    /// Set the policy for non-finite smoothed values (Collection only).
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        if self.nan_policy.is_some() {
            self.duplicate_param = Some("nan_policy");
        }
        self.nan_policy = Some(policy);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait BlurAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`BlurBuilder`] into a specialized execution builder.
    fn convert(builder: BlurBuilder<T>) -> Self::Output;
}

/// Marker for in-memory single-sequence processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> BlurAdapter<T> for Batch {
    type Output = BatchBlurBuilder<T>;

    fn convert(builder: BlurBuilder<T>) -> Self::Output {
        let mut result = BatchBlurBuilder::default();

        if let Some(bandwidth) = builder.bandwidth {
            result = result.bandwidth(bandwidth);
        }
        if let Some(precision) = builder.precision {
            result = result.precision(precision);
        }
        if let Some(passes) = builder.passes {
            result = result.passes(passes);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for multi-series collection processing.
#[derive(Debug, Clone, Copy)]
pub struct Collection;

impl<T: Float> BlurAdapter<T> for Collection {
    type Output = CollectionBlurBuilder<T>;

    fn convert(builder: BlurBuilder<T>) -> Self::Output {
        let mut result = CollectionBlurBuilder::default();

        if let Some(bandwidth) = builder.bandwidth {
            result = result.bandwidth(bandwidth);
        }
        if let Some(precision) = builder.precision {
            result = result.precision(precision);
        }
        if let Some(passes) = builder.passes {
            result = result.passes(passes);
        }
        if let Some(n) = builder.top_n {
            result = result.top_n(n);
        }
        if builder.keep_all == Some(true) {
            result = result.keep_all();
        }
        if let Some(policy) = builder.nan_policy {
            result = result.nan_policy(policy);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
