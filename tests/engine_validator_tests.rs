#![cfg(feature = "dev")]
//! Tests for precondition validation.
//!
//! These tests verify each validator method in isolation:
//! - Class-count bounds
//! - Sample emptiness and finiteness
//! - Sample size and distinct-value requirements
//! - Duplicate builder parameters

use chartprep::internals::engine::validator::Validator;
use chartprep::prelude::ChartPrepError;

// ============================================================================
// Class Count Tests
// ============================================================================

/// Class counts below 2 are rejected.
#[test]
fn test_class_count_bounds() {
    assert_eq!(
        Validator::validate_class_count(0),
        Err(ChartPrepError::InvalidClassCount(0))
    );
    assert_eq!(
        Validator::validate_class_count(1),
        Err(ChartPrepError::InvalidClassCount(1))
    );
    assert!(Validator::validate_class_count(2).is_ok());
    assert!(Validator::validate_class_count(9).is_ok());
}

// ============================================================================
// Sample Tests
// ============================================================================

/// Empty samples are rejected before anything else.
#[test]
fn test_empty_sample() {
    assert_eq!(
        Validator::validate_sample::<f64>(&[]),
        Err(ChartPrepError::EmptyInput)
    );
}

/// Non-finite values are rejected with the offending index in the message.
#[test]
fn test_non_finite_values() {
    let err = Validator::validate_sample(&[1.0, f64::NAN, 3.0]).unwrap_err();
    match err {
        ChartPrepError::InvalidNumericValue(msg) => assert!(msg.contains("sample[1]")),
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(Validator::validate_sample(&[1.0, f64::NEG_INFINITY]).is_err());
    assert!(Validator::validate_sample(&[1.0, 2.0, 3.0]).is_ok());
}

/// Sample length must cover the class count.
#[test]
fn test_sample_size() {
    assert_eq!(
        Validator::validate_sample_size(2, 3),
        Err(ChartPrepError::TooFewValues { got: 2, classes: 3 })
    );
    assert!(Validator::validate_sample_size(3, 3).is_ok());
}

/// Distinct values must cover the class count.
#[test]
fn test_distinct_values() {
    assert_eq!(
        Validator::validate_distinct(2, 3),
        Err(ChartPrepError::TooFewDistinct {
            distinct: 2,
            classes: 3
        })
    );
    assert!(Validator::validate_distinct(3, 3).is_ok());
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Duplicate parameter tracking surfaces the parameter name.
#[test]
fn test_duplicate_parameters() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("classes")),
        Err(ChartPrepError::DuplicateParameter {
            parameter: "classes"
        })
    );
}
