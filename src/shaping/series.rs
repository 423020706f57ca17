//! Series-name discovery from dataset columns.
//!
//! ## Purpose
//!
//! This module derives the list of plotted series from a dataset's field
//! names by filtering out reserved/structural columns.
//!
//! ## Design notes
//!
//! * **Order-preserving**: Series keep the column order of the source data;
//!   legends and colour cycles depend on it.
//! * **Caller-owned exclusions**: The two known call sites exclude different
//!   column sets, so the reserved set is never hard-coded here.
//!
//! ## Invariants
//!
//! * Output is a subsequence of the input field names.
//!
//! ## Non-goals
//!
//! * This module does not read rows or values; it is a pure name filter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Series Extraction
// ============================================================================

/// Filter field names down to plottable series, preserving source order.
pub fn series_names(fields: &[&str], excluded: &[&str]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| !excluded.contains(field))
        .map(|field| field.to_string())
        .collect()
}
