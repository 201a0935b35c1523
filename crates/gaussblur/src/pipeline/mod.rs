//! Layer 4: Pipeline
//!
//! # Purpose
//!
//! This layer shapes entity time-series data around the smoothing core:
//! - Entity series types (name, optional code, cumulative totals)
//! - Daily-increment derivation from cumulative totals
//! - Non-finite output substitution policy
//! - Descending top-N ranking by most recent total
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Pipeline ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Entity series types and daily-increment derivation.
pub mod series;

/// Collection-level transforms: NaN policy and top-N ranking.
pub mod transform;
