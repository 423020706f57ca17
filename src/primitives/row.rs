//! Row and cell types for ingested tabular chart data.
//!
//! ## Purpose
//!
//! This module defines the value objects that flow through the shaping
//! pipeline: the ordered field/cell mapping of one ingested record, the
//! per-series points assembled from it, and the highlight-band intervals.
//!
//! ## Design notes
//!
//! * **Ordered**: A row preserves the field order of the source dataset;
//!   series discovery depends on it.
//! * **Opaque keys**: Dates/ordinals pass through as strings. Date parsing is
//!   the loader's job, not this crate's.
//! * **Truthiness**: Cell truthiness mirrors the loader conventions of
//!   editorial CSV data (empty text is absent, any other text is present).
//! * **Immutability**: Rows are value objects; nothing here mutates after
//!   construction.
//!
//! ## Key concepts
//!
//! * **Reserved fields**: Structural columns (`date`, `group`, `label`,
//!   `annotate`, `highlight`, `type`, `marker`) ride alongside data-series
//!   columns in the same row.
//! * **Gap markers**: An explicit boolean `false` cell is a path break, not a
//!   missing value; `None` in an assembled point list means "lift the pen".
//!
//! ## Invariants
//!
//! * `Row::get` returns the first cell with the given name.
//! * Numeric coercion never panics; unparseable cells coerce to `None`.
//!
//! ## Non-goals
//!
//! * This module does not parse CSV/JSON or dates.
//! * This module does not decide shaping policy (see the shaping layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Reserved Field Names
// ============================================================================

/// Field carrying the highlight-band marker (`begin`/`end`) or line emphasis.
pub const HIGHLIGHT_FIELD: &str = "highlight";

/// Field carrying free-text annotations attached to a row.
pub const ANNOTATE_FIELD: &str = "annotate";

/// Field carrying the series grouping label.
pub const GROUP_FIELD: &str = "group";

/// Default key field (date/ordinal column) of editorial datasets.
pub const DEFAULT_KEY_FIELD: &str = "date";

// ============================================================================
// Cell Values
// ============================================================================

/// One cell of an ingested row: string-or-numeric, with an explicit boolean
/// for gap markers and `Empty` for absent cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Raw text as delivered by the loader.
    Text(String),

    /// Already-numeric value.
    Number(f64),

    /// Explicit boolean; `Bool(false)` is the path-break convention.
    Bool(bool),

    /// Missing cell.
    #[default]
    Empty,
}

impl CellValue {
    /// Coerce the cell to a numeric value.
    ///
    /// Text is trimmed and parsed as a decimal number. Booleans and empty
    /// cells have no numeric value. Coercion failure is `None`, never an
    /// error: editorial datasets have sparse columns.
    pub fn as_number<T: Float>(&self) -> Option<T> {
        match self {
            Self::Number(v) => T::from(*v),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().and_then(T::from)
            }
            Self::Bool(_) | Self::Empty => None,
        }
    }

    /// Whether the cell counts as "present" for line assembly.
    ///
    /// Mirrors the loader convention: empty text and missing cells are
    /// absent, any other text is present, zero is absent.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(v) => *v != 0.0,
            Self::Bool(b) => *b,
            Self::Empty => false,
        }
    }

    /// Text content of the cell, or `""` for non-text cells.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(s) => s.as_str(),
            _ => "",
        }
    }
}

// ============================================================================
// Row
// ============================================================================

/// One record of the ingested dataset: an ordered field-name → cell mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Append a cell, preserving insertion order (builder-style).
    pub fn with(mut self, field: &str, value: CellValue) -> Self {
        self.cells.push((field.to_string(), value));
        self
    }

    /// Convenience: append a text cell.
    pub fn with_text(self, field: &str, value: &str) -> Self {
        self.with(field, CellValue::Text(value.to_string()))
    }

    /// First cell with the given field name, if any.
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Cell for the field, treating a missing field as `Empty`.
    pub fn cell(&self, field: &str) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.get(field).unwrap_or(EMPTY)
    }

    /// Text content of the named field (`""` if missing or non-text).
    pub fn text(&self, field: &str) -> &str {
        self.cell(field).as_text()
    }

    /// Field names in source order.
    pub fn field_names(&self) -> Vec<&str> {
        self.cells.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ============================================================================
// Assembled Outputs
// ============================================================================

/// One plotted point of a series: key, coerced value, and row metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint<T> {
    /// Series (column) name the point belongs to.
    pub name: String,

    /// Ordinal/date key of the source row, passed through untyped.
    pub key: String,

    /// Numeric value of the series cell.
    pub value: T,

    /// Highlight marker of the source row (`""` when absent).
    pub highlight: String,

    /// Annotation text of the source row (`""` when absent).
    pub annotate: String,
}

/// One assembled per-series polyline.
///
/// `None` entries are explicit path breaks: consumers draw disjoint segments
/// around them.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLine<T> {
    /// Series name.
    pub name: String,

    /// Ordered points, with `None` as the gap marker.
    pub points: Vec<Option<SeriesPoint<T>>>,

    /// Whether the caller pulled this series out for emphasis.
    pub highlighted: bool,
}

/// A closed date/ordinal range derived from paired `begin`/`end` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightInterval {
    /// Key of the `begin` row.
    pub begin: String,

    /// Key of the paired `end` row.
    pub end: String,
}
