//! Jenks natural-breaks dynamic programming core.
//!
//! ## Purpose
//!
//! This module implements the optimal one-dimensional clustering procedure
//! behind choropleth class boundaries: a dynamic-programming matrix
//! construction over the sorted sample followed by a backward traceback that
//! reads the class boundaries off the matrices.
//!
//! ## Design notes
//!
//! * **Arena storage**: Both matrices are flat row-major `Vec`s indexed by
//!   (data position, class count); no nested dynamic structures.
//! * **Infinity sentinel**: "No finite-cost assignment known yet" is
//!   `T::infinity()`, never a magic large number.
//! * **Tie-break**: The DP update uses `>=` (later candidate wins on ties).
//!   Changing it to `>` silently alters output on tied inputs.
//! * **Complexity**: O(n_classes · m²). Each cell depends on an optimal
//!   sub-solution, so there is no closed-form shortcut.
//!
//! ## Key concepts
//!
//! * `lower_class_limits[l][j]` is the 1-based starting index (into the
//!   sorted sample) of the j-th class when classifying the first `l` sorted
//!   values into `j` classes.
//! * `variance[l][j]` is the minimal achievable sum of squared deviations for
//!   that configuration, computed incrementally as
//!   `sum_squares - sum * sum / count` while scanning backward from `l`.
//!
//! ## Invariants
//!
//! * Callers pass a sorted, finite sample with at least `n_classes` values
//!   and at least `n_classes` distinct values (validated in the engine).
//! * Matrices are local to one classification call; nothing is shared.
//!
//! ## Non-goals
//!
//! * This module does not sort, validate, or post-process; it only builds
//!   matrices and traces boundaries.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// DP Matrices
// ============================================================================

/// Flat `(m + 1) × (n_classes + 1)` matrices for the Jenks DP.
///
/// Row 0 and column 0 are unused padding so indices match the 1-based
/// formulation of the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct JenksMatrices<T> {
    /// 1-based optimal class start positions (`LC` in the literature).
    lower_class_limits: Vec<usize>,

    /// Minimal sum-of-squared-deviations costs (`OP` in the literature).
    variance: Vec<T>,

    /// Row stride (`n_classes + 1`).
    cols: usize,
}

impl<T: Float> JenksMatrices<T> {
    /// Allocate zeroed matrices for `m` data values and `n_classes` classes.
    pub fn new(m: usize, n_classes: usize) -> Self {
        let cols = n_classes + 1;
        Self {
            lower_class_limits: vec![0; (m + 1) * cols],
            variance: vec![T::zero(); (m + 1) * cols],
            cols,
        }
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Class start position for `i` values and `j` classes.
    #[inline]
    pub fn limit(&self, i: usize, j: usize) -> usize {
        self.lower_class_limits[self.idx(i, j)]
    }

    /// Minimal cost for `i` values and `j` classes.
    #[inline]
    pub fn variance(&self, i: usize, j: usize) -> T {
        self.variance[self.idx(i, j)]
    }

    #[inline]
    fn set_limit(&mut self, i: usize, j: usize, limit: usize) {
        let idx = self.idx(i, j);
        self.lower_class_limits[idx] = limit;
    }

    #[inline]
    fn set_variance(&mut self, i: usize, j: usize, cost: T) {
        let idx = self.idx(i, j);
        self.variance[idx] = cost;
    }
}

// ============================================================================
// Matrix Construction
// ============================================================================

/// Build the lower-class-limit and variance matrices for a sorted sample.
pub fn build_matrices<T: Float>(data: &[T], n_classes: usize) -> JenksMatrices<T> {
    let m = data.len();
    let mut matrices = JenksMatrices::new(m, n_classes);

    // Seed: one value is always its own class at zero cost; longer prefixes
    // start with no finite-cost assignment known.
    for j in 1..=n_classes {
        matrices.set_limit(1, j, 1);
        matrices.set_variance(1, j, T::zero());
        for i in 2..=m {
            matrices.set_variance(i, j, T::infinity());
        }
    }

    let mut variance = T::zero();

    for l in 2..=m {
        // Running sums for the candidate terminal class, scanning backward
        // from position l down to 1.
        let mut sum = T::zero();
        let mut sum_squares = T::zero();
        let mut count = T::zero();

        for offset in 1..=l {
            let lower_limit = l - offset + 1;
            let value = data[lower_limit - 1];

            count = count + T::one();
            sum = sum + value;
            sum_squares = sum_squares + value * value;

            // Sum of squared deviations of [lower_limit, l] as one class,
            // not normalized by count.
            variance = sum_squares - (sum * sum) / count;

            let prefix = lower_limit - 1;
            if prefix != 0 {
                for j in 2..=n_classes {
                    let candidate = variance + matrices.variance(prefix, j - 1);
                    // >= not >: ties favor the later-examined candidate.
                    if matrices.variance(l, j) >= candidate {
                        matrices.set_limit(l, j, lower_limit);
                        matrices.set_variance(l, j, candidate);
                    }
                }
            }
        }

        matrices.set_limit(l, 1, 1);
        matrices.set_variance(l, 1, variance);
    }

    matrices
}

// ============================================================================
// Traceback
// ============================================================================

/// Boundaries and class start positions read off the DP matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedBreaks<T> {
    /// `n_classes + 1` non-decreasing boundaries; first/last are the sample
    /// min/max sentinels.
    pub boundaries: Vec<T>,

    /// Ascending 1-based start positions of the `n_classes` classes in the
    /// sorted sample; the first is always 1.
    pub class_starts: Vec<usize>,
}

/// Trace the optimal class boundaries back through the matrices.
///
/// Starts at the full-sample row `m` and walks one class at a time: the
/// interior boundary for class `count` is the value immediately preceding the
/// computed class start (the upper edge of the previous class).
pub fn trace_breaks<T: Float>(
    data: &[T],
    matrices: &JenksMatrices<T>,
    n_classes: usize,
) -> TracedBreaks<T> {
    let m = data.len();
    let mut boundaries = vec![T::zero(); n_classes + 1];
    let mut class_starts = vec![1usize; n_classes];

    // The DP never places the outer bounds; set them directly.
    boundaries[0] = data[0];
    boundaries[n_classes] = data[m - 1];

    let mut k = m;
    let mut count = n_classes;
    while count > 1 {
        let start = matrices.limit(k, count);
        boundaries[count - 1] = data[start - 2];
        class_starts[count - 1] = start;
        k = start - 1;
        count -= 1;
    }

    TracedBreaks {
        boundaries,
        class_starts,
    }
}
