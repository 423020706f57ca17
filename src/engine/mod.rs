//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates validation and result assembly around the
//! algorithm and shaping layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Shaping
//!   ↓
//! Layer 1: Primitives
//! ```

/// Precondition validation.
pub mod validator;

/// Result and hand-off types.
pub mod output;
