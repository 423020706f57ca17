//! Sorting utilities for classification samples.
//!
//! ## Purpose
//!
//! This module provides the ascending sample sort the classifier runs on and
//! the distinct-value count used by its preconditions.
//!
//! ## Design notes
//!
//! * **Non-mutating**: The caller's sample is copied, never reordered.
//! * **Fast path**: Already-sorted input skips the sort.
//! * **Total order**: `partial_cmp` falls back to `Equal` for incomparable
//!   values; validation rejects non-finite samples before sorting matters.
//!
//! ## Invariants
//!
//! * Output is non-decreasing and the same length as the input.
//! * `distinct_count` requires sorted input.
//!
//! ## Non-goals
//!
//! * This module does not validate the sample (see the engine validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Return an ascending copy of the sample.
#[inline]
pub fn sort_ascending<T: Float>(sample: &[T]) -> Vec<T> {
    let mut data = sample.to_vec();

    // Fast path: already sorted
    if data.windows(2).all(|w| w[0] <= w[1]) {
        return data;
    }

    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    data
}

/// Count distinct values in a sorted slice.
#[inline]
pub fn distinct_count<T: Float>(sorted: &[T]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
}
