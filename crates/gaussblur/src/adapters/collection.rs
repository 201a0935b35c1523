//! Collection adapter for smoothing and ranking many entity series.
//!
//! ## Purpose
//!
//! This module provides the collection execution adapter: for each entity's
//! cumulative totals it derives daily increments, smooths them, applies the
//! NaN policy, then ranks all entities descending by most recent total and
//! truncates to the top N.
//!
//! ## Design notes
//!
//! * **Independent entities**: Each series is smoothed in isolation with no
//!   cross-series state, so the per-entity map is embarrassingly parallel;
//!   with the `parallel` feature it runs on rayon.
//! * **Builder Pattern**: Fluent configuration with the observed defaults
//!   (bandwidth 10, precision 1e-6, single pass, top 50, zero-fill).
//! * **Build-time validation**: `build()` runs all `Validator` checks, so
//!   `fit` is infallible.
//!
//! ## Invariants
//!
//! * Each output series' `daily` has the same length as its `totals`.
//! * Output is sorted descending by most recent total and has at most N
//!   entries when a limit is set.
//! * With `NanPolicy::ZeroFill`, every smoothed value is finite or zero.
//!
//! ## Non-goals
//!
//! * This adapter does not fetch or parse tabular data.
//! * This adapter does not render anything.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{BlurConfig, BlurExecutor};
use crate::engine::validator::Validator;
use crate::pipeline::series::{daily_increments, Series, SmoothedSeries};
use crate::pipeline::transform::{fill_nan, rank_top_n, NanPolicy};
use crate::primitives::errors::BlurError;

// ============================================================================
// Collection Builder
// ============================================================================

/// Builder for the collection smoother.
#[derive(Debug, Clone)]
pub struct CollectionBlurBuilder<T: Float> {
    /// Kernel bandwidth.
    pub bandwidth: T,

    /// Precision threshold bounding the kernel support.
    pub precision: T,

    /// Number of smoothing passes.
    pub passes: usize,

    /// Ranking limit; `None` keeps every series.
    pub top_n: Option<usize>,

    /// Policy for non-finite smoothed values.
    pub nan_policy: NanPolicy,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for CollectionBlurBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CollectionBlurBuilder<T> {
    /// Create a new collection builder with default parameters.
    fn new() -> Self {
        Self {
            bandwidth: T::from(10.0).unwrap(),
            precision: T::from(1e-6).unwrap(),
            passes: 1,
            top_n: Some(50),
            nan_policy: NanPolicy::default(),
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
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
    // Collection-Specific Setters
    // ========================================================================

    /// Keep only the `n` series with the largest most recent totals.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    /// Keep every series (ranking is still applied, nothing is truncated).
    pub fn keep_all(mut self) -> Self {
        self.top_n = None;
        self
    }

    /// Set the policy for non-finite smoothed values.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        self.nan_policy = policy;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the collection smoother.
    pub fn build(self) -> Result<CollectionBlur<T>, BlurError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_bandwidth(self.bandwidth)?;
        Validator::validate_precision(self.precision)?;
        Validator::validate_passes(self.passes)?;
        if let Some(n) = self.top_n {
            Validator::validate_top_n(n)?;
        }

        Ok(CollectionBlur { config: self })
    }
}

// ============================================================================
// Collection Processor
// ============================================================================

/// Collection smoother over many entity series.
#[derive(Debug, Clone)]
pub struct CollectionBlur<T: Float> {
    config: CollectionBlurBuilder<T>,
}

impl<T: Float> CollectionBlur<T> {
    /// Derive, smooth, and fill one entity's series.
    fn smooth_one(&self, series: Series<T>, config: &BlurConfig<T>) -> SmoothedSeries<T> {
        let increments = daily_increments(&series.totals);
        let output = BlurExecutor::run(&increments, config);

        let mut daily = output.smoothed;
        if self.config.nan_policy == NanPolicy::ZeroFill {
            fill_nan(&mut daily);
        }

        SmoothedSeries {
            name: series.name,
            code: series.code,
            totals: series.totals,
            daily,
        }
    }

    /// Rank the smoothed series and truncate to the configured limit.
    fn rank(&self, mut smoothed: Vec<SmoothedSeries<T>>) -> Vec<SmoothedSeries<T>> {
        let limit = self.config.top_n.unwrap_or(smoothed.len());
        rank_top_n(&mut smoothed, limit);
        smoothed
    }

    /// Configuration for the execution engine.
    fn engine_config(&self) -> BlurConfig<T> {
        BlurConfig {
            bandwidth: self.config.bandwidth,
            precision: self.config.precision,
            passes: self.config.passes,
        }
    }
}

#[cfg(not(feature = "parallel"))]
impl<T: Float> CollectionBlur<T> {
    /// Smooth every series, then rank and truncate.
    pub fn fit(&self, series: Vec<Series<T>>) -> Vec<SmoothedSeries<T>> {
        let config = self.engine_config();
        let smoothed: Vec<SmoothedSeries<T>> = series
            .into_iter()
            .map(|s| self.smooth_one(s, &config))
            .collect();
        self.rank(smoothed)
    }
}

#[cfg(feature = "parallel")]
impl<T: Float + Send + Sync> CollectionBlur<T> {
    /// Smooth every series in parallel, then rank and truncate.
    pub fn fit(&self, series: Vec<Series<T>>) -> Vec<SmoothedSeries<T>> {
        let config = self.engine_config();
        let smoothed: Vec<SmoothedSeries<T>> = series
            .into_par_iter()
            .map(|s| self.smooth_one(s, &config))
            .collect();
        self.rank(smoothed)
    }
}
