#![cfg(feature = "dev")]
//! Tests for the Jenks dynamic-programming core.
//!
//! These tests verify the matrix construction and traceback internals:
//! - Seed rows and infinity sentinels
//! - Lower-class-limit semantics
//! - Traceback boundaries and class starts
//! - Tie-break reproducibility
//!
//! ## Test Organization
//!
//! 1. **Matrix Construction** - Seeds, costs, limits
//! 2. **Traceback** - Boundaries and class starts
//! 3. **Determinism** - Tie-break stability

use approx::assert_relative_eq;

use chartprep::internals::algorithms::jenks::{build_matrices, trace_breaks, JenksMatrices};

// ============================================================================
// Matrix Construction Tests
// ============================================================================

/// Row 1 is seeded with limit 1 / cost 0 for every class count.
#[test]
fn test_seed_row() {
    let data = vec![1.0, 2.0, 3.0, 4.0];
    let matrices = build_matrices(&data, 3);

    for j in 1..=3 {
        assert_eq!(matrices.limit(1, j), 1);
        assert_eq!(matrices.variance(1, j), 0.0);
    }
}

/// Single-class costs equal the whole-prefix sum of squared deviations.
#[test]
fn test_single_class_costs() {
    let data = vec![1.0, 2.0, 3.0, 4.0];
    let matrices = build_matrices(&data, 2);

    // SS of [1,2]: 0.5; of [1,2,3]: 2.0; of [1,2,3,4]: 5.0
    assert_eq!(matrices.limit(2, 1), 1);
    assert_relative_eq!(matrices.variance(2, 1), 0.5, epsilon = 1e-12);
    assert_relative_eq!(matrices.variance(3, 1), 2.0, epsilon = 1e-12);
    assert_relative_eq!(matrices.variance(4, 1), 5.0, epsilon = 1e-12);
}

/// Multi-class costs are finite wherever a split exists, and optimal.
#[test]
fn test_two_class_costs() {
    let data = vec![1.0, 2.0, 10.0, 11.0];
    let matrices = build_matrices(&data, 2);

    // Optimal 2-class split of [1,2,10,11] is [1,2] | [10,11]: 0.5 + 0.5.
    assert_relative_eq!(matrices.variance(4, 2), 1.0, epsilon = 1e-12);
    assert_eq!(matrices.limit(4, 2), 3);
}

/// Fresh matrices are zeroed at the requested size.
#[test]
fn test_matrix_allocation() {
    let matrices = JenksMatrices::<f64>::new(5, 3);
    assert_eq!(matrices.limit(5, 3), 0);
    assert_eq!(matrices.variance(5, 3), 0.0);
}

// ============================================================================
// Traceback Tests
// ============================================================================

/// Traceback reads boundaries and class starts off the matrices.
#[test]
fn test_traceback_fixture() {
    let data: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    let matrices = build_matrices(&data, 3);
    let traced = trace_breaks(&data, &matrices, 3);

    assert_eq!(traced.boundaries, vec![1.0, 3.0, 6.0, 10.0]);
    assert_eq!(traced.class_starts, vec![1, 4, 7]);
}

/// Outer boundary slots are the sample min and max.
#[test]
fn test_traceback_sentinels() {
    let data = vec![2.0, 3.0, 5.0, 8.0, 13.0, 21.0];
    let matrices = build_matrices(&data, 3);
    let traced = trace_breaks(&data, &matrices, 3);

    assert_eq!(traced.boundaries[0], 2.0);
    assert_eq!(traced.boundaries[3], 21.0);
    assert!(traced.boundaries.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(traced.class_starts[0], 1);
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Tied inputs resolve identically across repeated runs.
#[test]
fn test_tie_break_stability() {
    let data = vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
    let first = trace_breaks(&data, &build_matrices(&data, 3), 3);
    let second = trace_breaks(&data, &build_matrices(&data, 3), 3);

    assert_eq!(first, second);
    assert_eq!(first.boundaries, vec![1.0, 1.0, 2.0, 3.0]);
}
