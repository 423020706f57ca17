//! High-level API for chart-data preparation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! Jenks natural-breaks classification and a fluent builder for shaping raw
//! rows into chart-ready data.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called;
//!   duplicate parameter settings are rejected.
//! * **Immutable**: Built models are immutable; there is no shared mutable
//!   configuration state between invocations.
//! * **Type-Safe**: Numeric work is generic over `Float` types.
//!
//! ## Key concepts
//!
//! ### Classification flow
//!
//! 1. Create a [`NaturalBreaksBuilder`] via `NaturalBreaks::new()`.
//! 2. Chain configuration (`.classes()`, `.return_diagnostics()`).
//! 3. `.build()` validates and returns a [`NaturalBreaksModel`].
//! 4. `.classify(&sample)` produces a [`BreaksResult`].
//!
//! ### Shaping flow
//!
//! 1. Create a [`ChartShaperBuilder`] via `ChartShaper::new()`.
//! 2. Chain configuration (`.exclude()`, `.highlight_series()`, ...).
//! 3. `.build()` validates and returns a [`ChartShaperModel`].
//! 4. `.shape(&rows)` produces a [`ChartData`] hand-off bundle.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::jenks::{build_matrices, trace_breaks};
use crate::engine::validator::Validator;
use crate::evaluation::classfit::{evaluate, ClassFit};
use crate::primitives::sorting::{distinct_count, sort_ascending};
use crate::shaping::extent::extent_multi;
use crate::shaping::highlights::highlight_intervals;
use crate::shaping::lines::line_points;
use crate::shaping::series::series_names;

// Publicly re-exported types
pub use crate::engine::output::{BreaksResult, ChartData};
pub use crate::evaluation::classfit::ClassFit as BreaksFit;
pub use crate::primitives::errors::ChartPrepError;
pub use crate::primitives::row::{
    CellValue, HighlightInterval, Row, SeriesLine, SeriesPoint, DEFAULT_KEY_FIELD,
};
pub use crate::shaping::extent::MissingPolicy;

/// Default class count: the length of the house sequential palette.
const DEFAULT_CLASSES: usize = 5;

/// Default reserved columns excluded from series discovery.
const DEFAULT_EXCLUDED: [&str; 4] = ["date", "annotate", "highlight", "type"];

// ============================================================================
// Natural-Breaks Builder
// ============================================================================

/// Fluent builder for configuring natural-breaks classification.
#[derive(Debug, Clone, Default)]
pub struct NaturalBreaksBuilder {
    /// Target number of classes.
    pub classes: Option<usize>,

    /// Enable goodness-of-variance-fit diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl NaturalBreaksBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            classes: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the target number of classes (colour bands).
    pub fn classes(mut self, classes: usize) -> Self {
        if self.classes.is_some() {
            self.duplicate_param = Some("classes");
        }
        self.classes = Some(classes);
        self
    }

    /// Request fit diagnostics (GVF, within-class sums, class sizes).
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and build the classifier model.
    pub fn build(self) -> Result<NaturalBreaksModel, ChartPrepError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let classes = self.classes.unwrap_or(DEFAULT_CLASSES);
        Validator::validate_class_count(classes)?;

        Ok(NaturalBreaksModel {
            classes,
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Natural-Breaks Model
// ============================================================================

/// Immutable natural-breaks classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalBreaksModel {
    /// Target number of classes.
    classes: usize,

    /// Whether to compute fit diagnostics.
    return_diagnostics: bool,
}

impl NaturalBreaksModel {
    /// Number of classes the model produces.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Compute optimal class boundaries for a numeric sample.
    ///
    /// The sample need not be sorted or deduplicated and is never mutated.
    /// Returns `classes + 1` non-decreasing boundaries whose first/last
    /// entries are the sample min/max; use [`BreaksResult::interior`] for a
    /// threshold-scale domain.
    pub fn classify<T: Float>(&self, sample: &[T]) -> Result<BreaksResult<T>, ChartPrepError> {
        Validator::validate_sample(sample)?;

        let data = sort_ascending(sample);
        let distinct = distinct_count(&data);

        // All-equal samples are legal: every split has zero variance, so the
        // boundaries collapse onto the single value.
        if distinct == 1 {
            return Ok(self.degenerate_result(&data));
        }

        Validator::validate_sample_size(data.len(), self.classes)?;
        Validator::validate_distinct(distinct, self.classes)?;

        let matrices = build_matrices(&data, self.classes);
        let traced = trace_breaks(&data, &matrices, self.classes);

        let m = data.len();
        let class_sizes: Vec<usize> = traced
            .class_starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = traced.class_starts.get(i + 1).map_or(m + 1, |&next| next);
                end - start
            })
            .collect();

        let fit = self
            .return_diagnostics
            .then(|| evaluate(&data, &traced.class_starts));

        Ok(BreaksResult {
            boundaries: traced.boundaries,
            classes: self.classes,
            class_sizes,
            fit,
        })
    }

    /// Result for a zero-variance sample: all boundaries equal, every value
    /// counted in the first class.
    fn degenerate_result<T: Float>(&self, data: &[T]) -> BreaksResult<T> {
        let mut class_sizes = vec![0usize; self.classes];
        class_sizes[0] = data.len();

        let fit = self.return_diagnostics.then(|| ClassFit {
            gvf: T::one(),
            total_ss: T::zero(),
            within_ss: T::zero(),
            class_sizes: class_sizes.clone(),
        });

        BreaksResult {
            boundaries: vec![data[0]; self.classes + 1],
            classes: self.classes,
            class_sizes,
            fit,
        }
    }
}

// ============================================================================
// Chart Shaper Builder
// ============================================================================

/// Fluent builder for configuring the row-to-chart-data shaping pipeline.
#[derive(Debug, Clone)]
pub struct ChartShaperBuilder<T> {
    /// Key (date/ordinal) column name.
    pub key_field: Option<String>,

    /// Reserved columns excluded from series discovery.
    pub excluded: Option<Vec<String>>,

    /// Series names pulled out for emphasis.
    pub highlight_series: Option<Vec<String>>,

    /// Emit `None` gap markers for explicit `false` cells.
    pub gap_on_false: Option<bool>,

    /// Policy for empty/sentinel cells in the extent computation.
    pub missing_policy: Option<MissingPolicy<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ChartShaperBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ChartShaperBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            key_field: None,
            excluded: None,
            highlight_series: None,
            gap_on_false: None,
            missing_policy: None,
            duplicate_param: None,
        }
    }

    /// Set the key (date/ordinal) column name.
    pub fn key_field(mut self, field: &str) -> Self {
        if self.key_field.is_some() {
            self.duplicate_param = Some("key_field");
        }
        self.key_field = Some(field.to_string());
        self
    }

    /// Set the reserved columns excluded from series discovery.
    pub fn exclude(mut self, fields: &[&str]) -> Self {
        if self.excluded.is_some() {
            self.duplicate_param = Some("exclude");
        }
        self.excluded = Some(fields.iter().map(|f| f.to_string()).collect());
        self
    }

    /// Set the series names pulled out for emphasis.
    pub fn highlight_series(mut self, names: &[&str]) -> Self {
        if self.highlight_series.is_some() {
            self.duplicate_param = Some("highlight_series");
        }
        self.highlight_series = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    /// Emit explicit gap markers for `false` cells.
    pub fn gap_on_false(mut self, enabled: bool) -> Self {
        if self.gap_on_false.is_some() {
            self.duplicate_param = Some("gap_on_false");
        }
        self.gap_on_false = Some(enabled);
        self
    }

    /// Set the missing-value policy for the extent computation.
    pub fn missing_policy(mut self, policy: MissingPolicy<T>) -> Self {
        if self.missing_policy.is_some() {
            self.duplicate_param = Some("missing_policy");
        }
        self.missing_policy = Some(policy);
        self
    }

    /// Validate the configuration and build the shaper model.
    pub fn build(self) -> Result<ChartShaperModel<T>, ChartPrepError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(ChartShaperModel {
            key_field: self
                .key_field
                .unwrap_or_else(|| DEFAULT_KEY_FIELD.to_string()),
            excluded: self
                .excluded
                .unwrap_or_else(|| DEFAULT_EXCLUDED.iter().map(|f| f.to_string()).collect()),
            highlight_series: self.highlight_series.unwrap_or_default(),
            gap_on_false: self.gap_on_false.unwrap_or(false),
            missing_policy: self.missing_policy.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Chart Shaper Model
// ============================================================================

/// Immutable row-to-chart-data shaping pipeline.
#[derive(Debug, Clone)]
pub struct ChartShaperModel<T> {
    key_field: String,
    excluded: Vec<String>,
    highlight_series: Vec<String>,
    gap_on_false: bool,
    missing_policy: MissingPolicy<T>,
}

impl<T: Float> ChartShaperModel<T> {
    /// Shape raw rows into the chart hand-off bundle.
    ///
    /// Derives series names from the first row's columns minus the exclusion
    /// set, computes the value extent over those series, assembles one line
    /// per series (partitioned into highlighted/regular), collects group
    /// labels, and pairs highlight-band markers.
    pub fn shape(&self, rows: &[Row]) -> Result<ChartData<T>, ChartPrepError> {
        let first = rows.first().ok_or(ChartPrepError::EmptyInput)?;

        let fields = first.field_names();
        let excluded: Vec<&str> = self.excluded.iter().map(String::as_str).collect();
        let names = series_names(&fields, &excluded);

        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let value_extent = extent_multi(rows, &name_refs, self.missing_policy)?;

        let mut lines = Vec::new();
        let mut highlight_lines = Vec::new();
        for name in &names {
            let points = line_points(rows, name, &self.key_field, self.gap_on_false);
            let highlighted = self.highlight_series.iter().any(|h| h == name);
            let line = SeriesLine {
                name: name.clone(),
                points,
                highlighted,
            };
            if highlighted {
                highlight_lines.push(line);
            } else {
                lines.push(line);
            }
        }

        let group_names: Vec<String> = rows
            .iter()
            .map(|row| row.text(crate::primitives::row::GROUP_FIELD))
            .filter(|group| !group.is_empty())
            .map(|group| group.to_string())
            .collect();
        let all_rows_grouped = group_names.len() == rows.len();

        let highlights = highlight_intervals(rows, &self.key_field)?;

        Ok(ChartData {
            series_names: names,
            group_names,
            all_rows_grouped,
            value_extent,
            lines,
            highlight_lines,
            highlights,
        })
    }
}
