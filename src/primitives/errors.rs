//! Error types for chart-data preparation and classification.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during data shaping
//! and Jenks natural-breaks classification, including input validation,
//! precondition failures, and malformed highlight markers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required counts).
//! * **Deferred**: Builder misconfiguration is caught and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty samples/row sets, non-finite values.
//! 2. **Classification preconditions**: Class count bounds, sample size, distinct values.
//! 3. **Data quality**: Unpaired highlight-band markers identify the offending row.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Failures are deterministic: the same input always produces the same error.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for chart-data preparation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartPrepError {
    /// No usable input: empty sample, empty row set, or no numeric cell at all.
    EmptyInput,

    /// Classification requires at least 2 classes.
    InvalidClassCount(usize),

    /// Sample is shorter than the requested number of classes.
    TooFewValues {
        /// Number of values provided.
        got: usize,
        /// Requested number of classes.
        classes: usize,
    },

    /// Sample has fewer distinct values than the requested number of classes.
    ///
    /// Proceeding would produce degenerate traceback indices, so this is
    /// rejected up front. A sample with exactly one distinct value is the
    /// documented exception and is handled before the check.
    TooFewDistinct {
        /// Number of distinct values in the sample.
        distinct: usize,
        /// Requested number of classes.
        classes: usize,
    },

    /// Sample contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A highlight `begin` marker is not immediately followed by an `end`.
    MalformedInterval {
        /// Zero-based index of the offending row in the input sequence.
        index: usize,
        /// Key (date/ordinal) of the offending row.
        key: String,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ChartPrepError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::InvalidClassCount(classes) => {
                write!(f, "Invalid class count: {classes} (must be at least 2)")
            }
            Self::TooFewValues { got, classes } => {
                write!(
                    f,
                    "Too few values: got {got}, need at least {classes} for {classes} classes"
                )
            }
            Self::TooFewDistinct { distinct, classes } => {
                write!(
                    f,
                    "Too few distinct values: got {distinct}, need at least {classes} for {classes} classes"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::MalformedInterval { index, key } => {
                write!(
                    f,
                    "Malformed highlight interval: 'begin' at row {index} (key '{key}') has no matching 'end'"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ChartPrepError {}
