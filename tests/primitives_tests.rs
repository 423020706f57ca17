#![cfg(feature = "dev")]
//! Tests for primitive rows, cells, and sorting utilities.
//!
//! These tests verify the foundations the shaping and classification layers
//! build on:
//! - Cell coercion and truthiness
//! - Row field lookup and ordering
//! - Sample sorting and distinct counting

use chartprep::internals::primitives::sorting::{distinct_count, sort_ascending};
use chartprep::prelude::{CellValue, Row};

// ============================================================================
// Cell Value Tests
// ============================================================================

/// Numeric coercion: numbers, parseable text, and everything else.
#[test]
fn test_cell_coercion() {
    assert_eq!(CellValue::Number(2.5).as_number::<f64>(), Some(2.5));
    assert_eq!(
        CellValue::Text("  -3.5 ".to_string()).as_number::<f64>(),
        Some(-3.5)
    );
    assert_eq!(CellValue::Text("n/a".to_string()).as_number::<f64>(), None);
    assert_eq!(CellValue::Text(String::new()).as_number::<f64>(), None);
    assert_eq!(CellValue::Bool(true).as_number::<f64>(), None);
    assert_eq!(CellValue::Empty.as_number::<f64>(), None);
}

/// Truthiness follows the loader conventions.
#[test]
fn test_cell_truthiness() {
    assert!(CellValue::Text("0.5".to_string()).is_truthy());
    assert!(CellValue::Text("no data".to_string()).is_truthy());
    assert!(!CellValue::Text(String::new()).is_truthy());
    assert!(!CellValue::Number(0.0).is_truthy());
    assert!(CellValue::Number(1.0).is_truthy());
    assert!(!CellValue::Bool(false).is_truthy());
    assert!(!CellValue::Empty.is_truthy());
}

// ============================================================================
// Row Tests
// ============================================================================

/// Lookup returns the first matching cell; missing fields read as Empty.
#[test]
fn test_row_lookup() {
    let row = Row::new()
        .with_text("date", "2019-12-12")
        .with("v", CellValue::Number(3.0));

    assert_eq!(row.text("date"), "2019-12-12");
    assert_eq!(row.get("v"), Some(&CellValue::Number(3.0)));
    assert_eq!(row.get("missing"), None);
    assert_eq!(row.cell("missing"), &CellValue::Empty);
    assert_eq!(row.text("v"), "");
}

/// Field names come back in insertion order.
#[test]
fn test_row_field_order() {
    let row = Row::new()
        .with_text("date", "d")
        .with_text("B", "2")
        .with_text("A", "1");

    assert_eq!(row.field_names(), vec!["date", "B", "A"]);
    assert_eq!(row.len(), 3);
    assert!(!row.is_empty());
    assert!(Row::new().is_empty());
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Sorting copies and never mutates; already-sorted input round-trips.
#[test]
fn test_sort_ascending() {
    let unsorted = vec![3.0, 1.0, 2.0];
    let sorted = sort_ascending(&unsorted);
    assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
    assert_eq!(unsorted, vec![3.0, 1.0, 2.0]);

    let already = vec![1.0, 2.0, 3.0];
    assert_eq!(sort_ascending(&already), already);
}

/// Distinct counting on sorted slices.
#[test]
fn test_distinct_count() {
    assert_eq!(distinct_count::<f64>(&[]), 0);
    assert_eq!(distinct_count(&[5.0]), 1);
    assert_eq!(distinct_count(&[5.0, 5.0, 5.0]), 1);
    assert_eq!(distinct_count(&[1.0, 1.0, 2.0, 3.0, 3.0]), 3);
}
