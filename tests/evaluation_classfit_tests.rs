#![cfg(feature = "dev")]
//! Tests for classification-fit diagnostics.
//!
//! These tests verify the goodness-of-variance-fit computation:
//! - Total and within-class sums of squared deviations
//! - GVF bounds and the zero-variance convention
//! - Class sizes derived from class starts
//! - Display rendering

use approx::assert_relative_eq;

use chartprep::internals::evaluation::classfit::evaluate;

// ============================================================================
// Sum-of-Squares Tests
// ============================================================================

/// Metrics for a hand-checked two-class split.
#[test]
fn test_two_class_metrics() {
    // [1,2] | [10,11]: within = 0.5 + 0.5; mean 6, total = 25+16+16+25 = 82.0
    let sorted = vec![1.0, 2.0, 10.0, 11.0];
    let fit = evaluate(&sorted, &[1, 3]);

    assert_relative_eq!(fit.within_ss, 1.0, epsilon = 1e-12);
    assert_relative_eq!(fit.total_ss, 82.0, epsilon = 1e-12);
    assert_relative_eq!(fit.gvf, 1.0 - 1.0 / 82.0, epsilon = 1e-12);
    assert_eq!(fit.class_sizes, vec![2, 2]);
}

/// Class sizes sum to the sample length for uneven splits.
#[test]
fn test_uneven_class_sizes() {
    let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    let fit = evaluate(&sorted, &[1, 4, 7]);

    assert_eq!(fit.class_sizes, vec![3, 3, 4]);
    assert_eq!(fit.class_sizes.iter().sum::<usize>(), sorted.len());
    assert_relative_eq!(fit.within_ss, 9.0, epsilon = 1e-12);
    assert_relative_eq!(fit.total_ss, 82.5, epsilon = 1e-12);
}

// ============================================================================
// GVF Bounds Tests
// ============================================================================

/// GVF stays within [0, 1].
#[test]
fn test_gvf_bounds() {
    let sorted = vec![1.0, 5.0, 9.0, 13.0];

    // Worst classing: everything in one class.
    let one_class = evaluate(&sorted, &[1]);
    assert_relative_eq!(one_class.gvf, 0.0, epsilon = 1e-12);

    // Singleton classes: perfect fit.
    let singletons = evaluate(&sorted, &[1, 2, 3, 4]);
    assert_relative_eq!(singletons.gvf, 1.0, epsilon = 1e-12);
}

/// A zero-variance sample reports GVF 1 by convention.
#[test]
fn test_zero_variance_sample() {
    let sorted = vec![4.0, 4.0, 4.0];
    let fit = evaluate(&sorted, &[1, 2]);

    assert_eq!(fit.gvf, 1.0);
    assert_eq!(fit.within_ss, 0.0);
    assert_eq!(fit.total_ss, 0.0);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Display renders the metrics without panicking.
#[test]
fn test_display() {
    let sorted = vec![1.0, 2.0, 10.0, 11.0];
    let fit = evaluate(&sorted, &[1, 3]);

    let rendered = format!("{}", fit);
    assert!(rendered.contains("GVF"));
    assert!(rendered.contains("Class sizes: 2 2"));
}
