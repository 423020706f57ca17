//! Layer 2: Shaping
//!
//! # Purpose
//!
//! This layer derives chart-ready structures from raw tabular rows: which
//! columns are series, the value extent across them, per-series point
//! sequences, and highlight-band intervals.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Shaping ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Series-name discovery.
pub mod series;

/// Multi-field value extents.
pub mod extent;

/// Per-series line assembly.
pub mod lines;

/// Highlight-band interval detection.
pub mod highlights;
