//! Highlight-band interval detection.
//!
//! ## Purpose
//!
//! This module scans rows for paired `begin`/`end` highlight markers and
//! emits the closed date/ordinal intervals consumers shade behind the plot.
//!
//! ## Design notes
//!
//! * **Data-quality errors**: A `begin` that is not immediately followed by
//!   an `end` in the filtered sequence is malformed source data and fails
//!   with the offending row identified. It is never silently dropped.
//! * **Stray `end` markers**: An `end` without a preceding `begin` is
//!   ignored, matching the source pipelines (only `begin` rows open an
//!   interval).
//!
//! ## Invariants
//!
//! * Intervals come out in row order; each pairs one `begin` with the next
//!   filtered `end`.
//!
//! ## Non-goals
//!
//! * This module does not parse or order keys; well-ordered input is the
//!   loader's contract.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::ChartPrepError;
use crate::primitives::row::{HighlightInterval, Row, HIGHLIGHT_FIELD};

/// Marker opening a highlight band.
const BEGIN_MARKER: &str = "begin";

/// Marker closing a highlight band.
const END_MARKER: &str = "end";

// ============================================================================
// Interval Detection
// ============================================================================

/// Pair `begin`/`end` highlight markers into closed intervals.
///
/// Rows are filtered to those whose highlight field is `begin` or `end`;
/// each `begin` is paired with the immediately following filtered row, which
/// must be an `end`.
pub fn highlight_intervals(
    rows: &[Row],
    key_field: &str,
) -> Result<Vec<HighlightInterval>, ChartPrepError> {
    let boundaries: Vec<(usize, &Row)> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let marker = row.text(HIGHLIGHT_FIELD);
            marker == BEGIN_MARKER || marker == END_MARKER
        })
        .collect();

    let mut intervals = Vec::new();

    for (pos, &(index, row)) in boundaries.iter().enumerate() {
        if row.text(HIGHLIGHT_FIELD) != BEGIN_MARKER {
            continue;
        }
        match boundaries.get(pos + 1) {
            Some(&(_, next)) if next.text(HIGHLIGHT_FIELD) == END_MARKER => {
                intervals.push(HighlightInterval {
                    begin: row.text(key_field).to_string(),
                    end: next.text(key_field).to_string(),
                });
            }
            _ => {
                return Err(ChartPrepError::MalformedInterval {
                    index,
                    key: row.text(key_field).to_string(),
                });
            }
        }
    }

    Ok(intervals)
}
