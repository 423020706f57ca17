//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer measures the quality of a classification after the algorithm
//! layer has produced it.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Shaping
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-variance-fit diagnostics.
pub mod classfit;
