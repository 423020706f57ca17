//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports all necessary types for
//! convenient usage of the chartprep API. The prelude should provide a
//! one-stop import for classification and shaping workflows.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - All prelude exports are accessible
//! 2. **Type Usage** - Types can be used without qualification
//! 3. **Builder Pattern** - Complete workflows work with prelude imports

use chartprep::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that all prelude imports work correctly.
///
/// Verifies that the prelude exports all necessary types for classification.
#[test]
fn test_prelude_imports() {
    let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    let result = NaturalBreaks::new().classes(2).build().unwrap().classify(&sample);

    assert!(result.is_ok(), "Basic classification should work with prelude imports");
}

/// Test MissingPolicy variants are available unqualified.
#[test]
fn test_prelude_missing_policy() {
    let _ = ChartShaper::<f64>::new().missing_policy(Skip);
    let _ = ChartShaper::<f64>::new().missing_policy(Floor(0.0));
    let _: MissingPolicy<f64> = MissingPolicy::default();
}

/// Test row construction types are available.
#[test]
fn test_prelude_row_types() {
    let row = Row::new()
        .with_text("date", "d1")
        .with("v", CellValue::Number(1.0));

    assert_eq!(row.text("date"), "d1");
}

/// Test complete workflow with prelude.
///
/// Verifies that shaping followed by classification works with only prelude
/// imports.
#[test]
fn test_prelude_complete_workflow() {
    let rows = vec![
        Row::new().with_text("date", "d1").with_text("v", "1"),
        Row::new().with_text("date", "d2").with_text("v", "2"),
        Row::new().with_text("date", "d3").with_text("v", "8"),
        Row::new().with_text("date", "d4").with_text("v", "9"),
    ];

    let chart: ChartData<f64> = ChartShaper::new().build().unwrap().shape(&rows).unwrap();
    assert_eq!(chart.series_names, vec!["v"]);

    let values: Vec<f64> = chart.lines[0]
        .points
        .iter()
        .flatten()
        .map(|p| p.value)
        .collect();

    let breaks: BreaksResult<f64> = NaturalBreaks::new()
        .classes(2)
        .return_diagnostics()
        .build()
        .unwrap()
        .classify(&values)
        .unwrap();

    assert_eq!(breaks.boundaries, vec![1.0, 2.0, 9.0]);
    assert_eq!(breaks.interior(), &[2.0]);
    let fit: &BreaksFit<f64> = breaks.fit.as_ref().unwrap();
    assert!(fit.gvf > 0.9);
}

/// Test error types are available.
///
/// Verifies that error handling works with prelude imports.
#[test]
fn test_prelude_error_handling() {
    let sample: Vec<f64> = vec![];

    let result = NaturalBreaks::new().classes(2).build().unwrap().classify(&sample);

    assert_eq!(result.unwrap_err(), ChartPrepError::EmptyInput);

    let lines: Vec<SeriesLine<f64>> = Vec::new();
    assert!(lines.is_empty());

    let interval = HighlightInterval {
        begin: "a".to_string(),
        end: "b".to_string(),
    };
    assert_eq!(interval.begin, "a");

    let point = SeriesPoint {
        name: "v".to_string(),
        key: "d1".to_string(),
        value: 1.0_f64,
        highlight: String::new(),
        annotate: String::new(),
    };
    assert_eq!(point.value, 1.0);
}
