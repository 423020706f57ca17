//! Multi-field value extents.
//!
//! ## Purpose
//!
//! This module computes the minimum/maximum of a set of named numeric fields
//! across a sequence of rows, with an explicit policy for missing and
//! sentinel cells.
//!
//! ## Design notes
//!
//! * **Explicit policy**: The source call sites disagreed on missing values
//!   (skip vs. floor-substitute), so the choice is a parameter, not an
//!   implementation detail. `Skip` is the default.
//! * **Tolerant coercion**: A cell that fails numeric coercion under `Skip`
//!   is "no value for this row", never a fatal error.
//! * **Sentinel**: The `"*"` token means "no data" in editorial datasets and
//!   is treated exactly like an empty cell.
//!
//! ## Invariants
//!
//! * `min <= max` on success.
//! * The result reflects every usable cell across all rows × all fields.
//!
//! ## Non-goals
//!
//! * This module does not decide which fields are series (see `series`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ChartPrepError;
use crate::primitives::row::{CellValue, Row};

// ============================================================================
// Missing-Value Policy
// ============================================================================

/// Sentinel token signifying "no data" in a raw cell.
pub const NO_DATA_SENTINEL: &str = "*";

/// Policy for cells that are empty, missing, or the `"*"` sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissingPolicy<T> {
    /// Exclude the cell from the min/max comparison.
    Skip,

    /// Substitute a replacement floor for the cell.
    Floor(T),
}

impl<T> Default for MissingPolicy<T> {
    fn default() -> Self {
        Self::Skip
    }
}

// ============================================================================
// Extent Computation
// ============================================================================

/// Compute the (min, max) of the named fields across all rows.
///
/// Cells that are empty, missing, an explicit `false` gap marker, or the
/// `"*"` sentinel are handled per `policy`. Cells that are present but fail
/// numeric coercion are skipped. Returns `EmptyInput` if no cell contributes
/// a value at all.
pub fn extent_multi<T: Float>(
    rows: &[Row],
    fields: &[&str],
    policy: MissingPolicy<T>,
) -> Result<(T, T), ChartPrepError> {
    let mut min: Option<T> = None;
    let mut max: Option<T> = None;

    let mut accumulate = |value: T| {
        min = Some(min.map_or(value, |m| if value < m { value } else { m }));
        max = Some(max.map_or(value, |m| if value > m { value } else { m }));
    };

    for row in rows {
        for field in fields {
            let cell = row.cell(field);
            if is_no_data(cell) {
                match policy {
                    MissingPolicy::Skip => {}
                    MissingPolicy::Floor(floor) => accumulate(floor),
                }
                continue;
            }
            if let Some(value) = cell.as_number::<T>() {
                accumulate(value);
            }
        }
    }

    match (min, max) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(ChartPrepError::EmptyInput),
    }
}

/// Whether a cell carries no data for extent purposes.
fn is_no_data(cell: &CellValue) -> bool {
    match cell {
        CellValue::Empty | CellValue::Bool(false) => true,
        CellValue::Text(s) => {
            let trimmed = s.trim();
            trimmed.is_empty() || trimmed == NO_DATA_SENTINEL
        }
        _ => false,
    }
}
