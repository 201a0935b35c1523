//! # gaussblur — adaptive Gaussian kernel smoothing for 1-D time series
//!
//! Batch smoothing of noisy daily time-series by Gaussian kernel
//! convolution with an adaptive, precision-bounded kernel radius, plus the
//! entity-series pipeline that typically surrounds it: daily-increment
//! derivation from cumulative totals, NaN substitution, and descending
//! top-N ranking.
//!
//! ## How it works
//!
//! Each output value is a normalized weighted average of the input sample
//! at the same index and its neighbors, with weights falling off as
//! `exp(-(r * d)^2)` of index distance `d`, where `r = 2 / bandwidth`. The
//! Gaussian has unbounded support, so the expansion is cut off where the
//! weight drops to a precision threshold; the crossing distance is derived
//! analytically, which bounds the loop and makes termination provable.
//! Normalizing by the accumulated weight keeps boundary indices — which see
//! fewer neighbors — correct without any padding.
//!
//! ## Quick Start
//!
//! ### Smoothing one sequence
//!
//! ```rust
//! use gaussblur::prelude::*;
//!
//! let daily = vec![0.0, 12.0, 3.0, 9.0, 2.0, 14.0, 5.0];
//!
//! // Build the model
//! let model = Blur::new()
//!     .bandwidth(10.0)    // Kernel width; larger = smoother
//!     .adapter(Batch)
//!     .build()?;
//!
//! // Smooth the samples
//! let result = model.fit(&daily);
//!
//! assert_eq!(result.len(), daily.len());
//! # Result::<(), BlurError>::Ok(())
//! ```
//!
//! ### Smoothing and ranking entity series
//!
//! ```rust
//! use gaussblur::prelude::*;
//!
//! // Cumulative totals per entity; increments are derived internally.
//! let series = vec![
//!     Series::new("Italy", vec![0.0, 3.0, 9.0, 21.0]),
//!     Series::new("Spain", vec![0.0, 1.0, 4.0, 9.0]),
//! ];
//!
//! let model = Blur::new()
//!     .bandwidth(10.0)
//!     .passes(1)                      // Number of smoothing passes
//!     .top_n(1)                       // Keep the largest entity only
//!     .nan_policy(ZeroFill)           // Replace NaN output with 0
//!     .adapter(Collection)
//!     .build()?;
//!
//! let top = model.fit(series);
//!
//! assert_eq!(top.len(), 1);
//! assert_eq!(top[0].name, "Italy");
//! assert_eq!(top[0].daily.len(), top[0].totals.len());
//! # Result::<(), BlurError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Configuration errors surface at `build()`; a built smoother is
//! infallible, matching the smoothing contract (empty input yields empty
//! output, and the routine itself never raises):
//!
//! ```rust
//! use gaussblur::prelude::*;
//!
//! let err = Blur::new()
//!     .bandwidth(0.0)
//!     .adapter(Batch)
//!     .build();
//! assert_eq!(err.unwrap_err(), BlurError::InvalidBandwidth(0.0));
//! ```
//!
//! ## Parallel collections
//!
//! With the `parallel` feature, the Collection adapter smooths entity
//! series on a rayon thread pool; each series is independent, so the
//! fan-out is share-nothing.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features and
//! enable `libm` for the float intrinsics:
//!
//! ```toml
//! [dependencies]
//! gaussblur = { version = "0.1", default-features = false, features = ["libm"] }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and accumulator buffers.
mod primitives;

// Layer 2: Math - the Gaussian kernel and its support radius.
mod math;

// Layer 3: Engine - validation and the convolution executor.
mod engine;

// Layer 4: Pipeline - entity series shaping and ranking transforms.
mod pipeline;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        daily_increments,
        Adapter::{Batch, Collection},
        BatchBlur, BlurBuilder as Blur, BlurError, BlurResult, CollectionBlur, NanPolicy,
        NanPolicy::Propagate,
        NanPolicy::ZeroFill,
        Series, SmoothedSeries,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod pipeline {
        pub use crate::pipeline::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
