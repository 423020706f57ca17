//! Classification-quality diagnostics.
//!
//! ## Purpose
//!
//! This module measures how well a set of natural breaks fits its sample:
//! total and within-class sums of squared deviations and the
//! goodness-of-variance fit (GVF) derived from them.
//!
//! ## Design notes
//!
//! * **Running sums**: Per-class costs use the same
//!   `sum_squares - sum * sum / count` form as the DP, so diagnostics agree
//!   with the optimizer's objective.
//! * **Optional**: Computed only when the caller asks for diagnostics.
//! * **Generics**: All computation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **SDAM**: Sum of squared deviations from the array mean (total).
//! * **SDCM**: Sum of squared deviations from the class means (within).
//! * **GVF**: `1 - SDCM / SDAM`; 1 is a perfect fit, 0 explains nothing.
//!
//! ## Invariants
//!
//! * GVF is clamped to `[0, 1]`; a zero-variance sample reports GVF 1.
//! * `class_sizes` sums to the sample length.
//!
//! ## Non-goals
//!
//! * This module does not choose the class count or compute the breaks.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Goodness-of-fit metrics for a natural-breaks classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassFit<T> {
    /// Goodness-of-variance fit, in `[0, 1]`.
    pub gvf: T,

    /// Total sum of squared deviations from the sample mean (SDAM).
    pub total_ss: T,

    /// Within-class sum of squared deviations (SDCM).
    pub within_ss: T,

    /// Number of sample values in each class.
    pub class_sizes: Vec<usize>,
}

// ============================================================================
// Evaluation
// ============================================================================

/// Sum of squared deviations of one contiguous slice.
fn segment_ss<T: Float>(segment: &[T]) -> T {
    let mut sum = T::zero();
    let mut sum_squares = T::zero();
    let mut count = T::zero();
    for &value in segment {
        count = count + T::one();
        sum = sum + value;
        sum_squares = sum_squares + value * value;
    }
    if segment.is_empty() {
        T::zero()
    } else {
        sum_squares - (sum * sum) / count
    }
}

/// Evaluate a classification given the sorted sample and the ascending
/// 1-based class start positions produced by the traceback.
pub fn evaluate<T: Float>(sorted: &[T], class_starts: &[usize]) -> ClassFit<T> {
    let m = sorted.len();
    let total_ss = segment_ss(sorted);

    let mut within_ss = T::zero();
    let mut class_sizes = Vec::with_capacity(class_starts.len());

    for (i, &start) in class_starts.iter().enumerate() {
        let begin = start - 1;
        let end = class_starts.get(i + 1).map_or(m, |&next| next - 1);
        within_ss = within_ss + segment_ss(&sorted[begin..end]);
        class_sizes.push(end - begin);
    }

    let gvf = if total_ss > T::zero() {
        let raw = T::one() - within_ss / total_ss;
        raw.max(T::zero()).min(T::one())
    } else {
        // Zero-variance sample: any classing is a perfect fit.
        T::one()
    };

    ClassFit {
        gvf,
        total_ss,
        within_ss,
        class_sizes,
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ClassFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Classification Fit:")?;
        writeln!(f, "  GVF:       {}", self.gvf)?;
        writeln!(f, "  Total SS:  {}", self.total_ss)?;
        writeln!(f, "  Within SS: {}", self.within_ss)?;
        write!(f, "  Class sizes:")?;
        for size in &self.class_sizes {
            write!(f, " {}", size)?;
        }
        writeln!(f)
    }
}
