//! Per-series line assembly.
//!
//! ## Purpose
//!
//! This module regroups row-oriented tabular data into one ordered point
//! sequence per series, carrying highlight/annotation metadata and optionally
//! inserting explicit gap markers.
//!
//! ## Design notes
//!
//! * **Row order preserved**: Points come out in row order; the key column is
//!   opaque and never sorted here.
//! * **Gap markers**: An explicit `Bool(false)` cell becomes `None` when
//!   `gap_on_false` is set, so consumers draw disjoint segments. Without the
//!   flag, the row is skipped for that series.
//! * **Tolerant coercion**: A truthy cell that fails numeric coercion is
//!   skipped (sparse editorial columns), not an error.
//!
//! ## Invariants
//!
//! * Every `Some` point carries the row's key, highlight, and annotation.
//! * Rows with empty/missing cells produce neither a point nor a gap.
//!
//! ## Non-goals
//!
//! * This module does not partition series into highlighted/regular sets
//!   (the API layer does, per caller configuration).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::row::{CellValue, Row, SeriesPoint, ANNOTATE_FIELD, HIGHLIGHT_FIELD};

// ============================================================================
// Line Assembly
// ============================================================================

/// Assemble the ordered point sequence of one series.
///
/// For each row: a truthy cell yields a point, an explicit `false` cell
/// yields a `None` gap marker when `gap_on_false` is set, and anything else
/// is skipped.
pub fn line_points<T: Float>(
    rows: &[Row],
    series: &str,
    key_field: &str,
    gap_on_false: bool,
) -> Vec<Option<SeriesPoint<T>>> {
    let mut points = Vec::new();

    for row in rows {
        let cell = row.cell(series);
        if cell.is_truthy() {
            if let Some(value) = cell.as_number::<T>() {
                points.push(Some(SeriesPoint {
                    name: series.to_string(),
                    key: row.text(key_field).to_string(),
                    value,
                    highlight: row.text(HIGHLIGHT_FIELD).to_string(),
                    annotate: row.text(ANNOTATE_FIELD).to_string(),
                }));
            }
        } else if gap_on_false && *cell == CellValue::Bool(false) {
            points.push(None);
        }
    }

    points
}
