//! Output types for classification and shaping results.
//!
//! ## Purpose
//!
//! This module defines the `BreaksResult` struct returned by natural-breaks
//! classification and the `ChartData` bundle handed to external charting
//! collaborators.
//!
//! ## Design notes
//!
//! * **Value objects**: Results are constructed fresh per invocation and
//!   never share mutable state across calls.
//! * **Optional diagnostics**: Fit metrics are only populated on request.
//! * **Ergonomics**: Both results implement `Display` for human-readable
//!   summaries.
//!
//! ## Key concepts
//!
//! * **Outer sentinels**: `boundaries` always carries the sample min/max in
//!   its first/last slots; `interior()` is the threshold-scale domain with
//!   those sentinels dropped.
//! * **Hand-off bundle**: `ChartData` is everything the external renderer,
//!   legend, and colour-scale components consume.
//!
//! ## Invariants
//!
//! * `boundaries` is non-decreasing with length `classes + 1`.
//! * `class_sizes` has length `classes` and sums to the sample length.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::classfit::ClassFit;
use crate::primitives::row::{HighlightInterval, SeriesLine};

// ============================================================================
// Classification Result
// ============================================================================

/// Natural-breaks classification output.
#[derive(Debug, Clone, PartialEq)]
pub struct BreaksResult<T> {
    /// `classes + 1` non-decreasing class edges; first/last are the sample
    /// min/max.
    pub boundaries: Vec<T>,

    /// Number of classes requested.
    pub classes: usize,

    /// Number of sample values in each class.
    pub class_sizes: Vec<usize>,

    /// Fit diagnostics, when requested via the builder.
    pub fit: Option<ClassFit<T>>,
}

impl<T: Float> BreaksResult<T> {
    /// Interior breakpoints: the boundaries with the min/max sentinels
    /// dropped, ready to use as a threshold-scale domain.
    pub fn interior(&self) -> &[T] {
        &self.boundaries[1..self.boundaries.len() - 1]
    }

    /// Check if fit diagnostics were computed.
    pub fn has_fit(&self) -> bool {
        self.fit.is_some()
    }
}

impl<T: Float + Display + Debug> Display for BreaksResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Classes: {}", self.classes)?;
        write!(f, "  Boundaries:")?;
        for boundary in &self.boundaries {
            write!(f, " {}", boundary)?;
        }
        writeln!(f)?;
        write!(f, "  Class sizes:")?;
        for size in &self.class_sizes {
            write!(f, " {}", size)?;
        }
        writeln!(f)?;

        if let Some(fit) = &self.fit {
            writeln!(f)?;
            write!(f, "{}", fit)?;
        }

        Ok(())
    }
}

// ============================================================================
// Shaped Chart Data
// ============================================================================

/// Assembled chart data handed to external rendering collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData<T> {
    /// Plottable series names, in source column order.
    pub series_names: Vec<String>,

    /// Group labels in row order (not deduplicated; draw order depends on
    /// repetition).
    pub group_names: Vec<String>,

    /// Whether every row carries a group label (drives ordinal palette
    /// selection at the call site).
    pub all_rows_grouped: bool,

    /// (min, max) across all series columns.
    pub value_extent: (T, T),

    /// Regular series lines.
    pub lines: Vec<SeriesLine<T>>,

    /// Series pulled out for emphasis, per caller configuration.
    pub highlight_lines: Vec<SeriesLine<T>>,

    /// Highlight-band intervals derived from paired begin/end markers.
    pub highlights: Vec<HighlightInterval>,
}

impl<T: Float + Display> Display for ChartData<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Chart Data:")?;
        writeln!(f, "  Series:          {}", self.series_names.len())?;
        writeln!(f, "  Highlighted:     {}", self.highlight_lines.len())?;
        writeln!(f, "  Highlight bands: {}", self.highlights.len())?;
        writeln!(
            f,
            "  Value extent:    [{}, {}]",
            self.value_extent.0, self.value_extent.1
        )?;
        write!(f, "  Names:")?;
        for name in &self.series_names {
            write!(f, " {}", name)?;
        }
        writeln!(f)
    }
}
