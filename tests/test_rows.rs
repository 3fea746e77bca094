//! Unit tests for row cleaning and the per-row worker

use csv::StringRecord;
use farelens::allocate::{clean_row, process_row};

fn record(cells: &[&str]) -> StringRecord {
    StringRecord::from(cells.to_vec())
}

#[test]
fn blank_cells_coerce_to_zero() {
    let cleaned = clean_row(&record(&["10", "", "3", "7"])).unwrap();
    assert_eq!(cleaned, vec![10.0, 0.0, 3.0, 7.0]);
}

#[test]
fn whitespace_around_numbers_is_accepted() {
    let cleaned = clean_row(&record(&[" 2.5 ", "1"])).unwrap();
    assert_eq!(cleaned, vec![2.5, 1.0]);
}

#[test]
fn non_numeric_cell_fails_cleaning() {
    assert!(clean_row(&record(&["10", "abc", "3"])).is_none());
    assert!(clean_row(&record(&["xyz"])).is_none());
}

#[test]
fn empty_record_produces_no_output() {
    assert!(process_row(1, &StringRecord::new()).is_none());
}

#[test]
fn unparseable_row_produces_skip_diagnostic() {
    let result = process_row(3, &record(&["10", "abc"])).unwrap();
    assert_eq!(result, "Row 3: Contains non-float values. Skipping.");
}

#[test]
fn solved_row_formats_full_block() {
    let result = process_row(1, &record(&["10", "3", "7"])).unwrap();
    assert_eq!(
        result,
        "Row 1:\n  Big Number: 10\n  Small Numbers (options): [3.0, 7.0]\n  Best Combination: [3.0, 7.0] -> Sum: 10\n"
    );
}

#[test]
fn blank_candidate_cells_appear_as_zero_options() {
    let result = process_row(1, &record(&["10", "", "3", "7"])).unwrap();
    assert!(result.contains("Small Numbers (options): [0.0, 3.0, 7.0]"));
    assert!(result.contains("Best Combination: [3.0, 7.0] -> Sum: 10"));
}

#[test]
fn row_with_no_candidates_reports_empty_combination() {
    let result = process_row(5, &record(&["42"])).unwrap();
    assert_eq!(
        result,
        "Row 5:\n  Big Number: 42\n  Small Numbers (options): []\n  Best Combination: [] -> Sum: 0\n"
    );
}

#[test]
fn row_numbers_follow_the_given_line() {
    let result = process_row(10, &record(&["5", "bad"])).unwrap();
    assert!(result.starts_with("Row 10:"));
}
