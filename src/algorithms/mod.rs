//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the core classification algorithm: the Jenks
//! natural-breaks dynamic program and its traceback.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Shaping
//!   ↓
//! Layer 1: Primitives
//! ```

/// Jenks natural-breaks matrices and traceback.
pub mod jenks;
