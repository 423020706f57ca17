//! Input validation for classification and shaping.
//!
//! ## Purpose
//!
//! This module provides the precondition checks for natural-breaks
//! classification and the builder configuration, with one method per
//! constraint.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Sample validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Class-count bounds**: At least 2 classes, never more than the sample
//!   supports.
//! * **Finite checks**: Non-finite sample values are rejected with the
//!   offending index, never classified.
//! * **Distinct values**: Fewer distinct values than classes would send the
//!   traceback out of range, so it is rejected up front.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the classification itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ChartPrepError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for classification inputs and builder configuration.
///
/// Provides static methods returning `Result<(), ChartPrepError>` that fail
/// fast on the first violation.
pub struct Validator;

impl Validator {
    /// Validate the requested number of classes.
    pub fn validate_class_count(classes: usize) -> Result<(), ChartPrepError> {
        if classes < 2 {
            return Err(ChartPrepError::InvalidClassCount(classes));
        }
        Ok(())
    }

    /// Validate a classification sample: non-empty, all values finite.
    pub fn validate_sample<T: Float>(sample: &[T]) -> Result<(), ChartPrepError> {
        if sample.is_empty() {
            return Err(ChartPrepError::EmptyInput);
        }

        for (i, &value) in sample.iter().enumerate() {
            if !value.is_finite() {
                return Err(ChartPrepError::InvalidNumericValue(format!(
                    "sample[{}]={}",
                    i,
                    value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that the sample is long enough for the class count.
    pub fn validate_sample_size(len: usize, classes: usize) -> Result<(), ChartPrepError> {
        if len < classes {
            return Err(ChartPrepError::TooFewValues { got: len, classes });
        }
        Ok(())
    }

    /// Validate that the sample has enough distinct values for the class
    /// count.
    ///
    /// The single-distinct-value case is legal and handled by the caller
    /// before this check.
    pub fn validate_distinct(distinct: usize, classes: usize) -> Result<(), ChartPrepError> {
        if distinct < classes {
            return Err(ChartPrepError::TooFewDistinct { distinct, classes });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ChartPrepError> {
        if let Some(parameter) = duplicate_param {
            return Err(ChartPrepError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
