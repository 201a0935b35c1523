//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides the execution adapters:
//! - `Batch` smooths one sequence of samples in memory
//! - `Collection` smooths many entity series and ranks them
//!
//! Both validate their configuration at `build()` and delegate the actual
//! computation to the engine.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Pipeline
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter: one in-memory sequence.
pub mod batch;

/// Collection adapter: many entity series, ranked and truncated.
pub mod collection;
