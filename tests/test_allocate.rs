//! End-to-end tests for the allocation pipeline

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use farelens::allocate;

#[path = "common/mod.rs"]
mod common;

#[test]
fn report_blocks_follow_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = common::write_allocation_csv(temp_dir.path(), "10,3,7\nabc,1\n5,2,2\n");
    let output = temp_dir.path().join("output.txt");

    allocate::process_csv_file(&input, &output).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    let expected = "\
Row 1:
  Big Number: 10
  Small Numbers (options): [3.0, 7.0]
  Best Combination: [3.0, 7.0] -> Sum: 10

Row 2: Contains non-float values. Skipping.
Row 3:
  Big Number: 5
  Small Numbers (options): [2.0, 2.0]
  Best Combination: [2.0, 2.0] -> Sum: 4

";
    assert_eq!(contents, expected);
}

#[test]
fn failed_rows_do_not_block_others() {
    let temp_dir = TempDir::new().unwrap();
    let input = common::write_allocation_csv(temp_dir.path(), "bad,row\n9,3,7,5\n");
    let output = temp_dir.path().join("output.txt");

    allocate::process_csv_file(&input, &output).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("Row 1: Contains non-float values. Skipping."));
    assert!(contents.contains("Best Combination: [3.0, 5.0] -> Sum: 8"));
}

#[test]
fn blank_cells_default_to_zero_in_report() {
    let temp_dir = TempDir::new().unwrap();
    let input = common::write_allocation_csv(temp_dir.path(), "10,,3,7\n");
    let output = temp_dir.path().join("output.txt");

    allocate::process_csv_file(&input, &output).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("Small Numbers (options): [0.0, 3.0, 7.0]"));
}

#[test]
fn blank_lines_still_count_toward_row_numbers() {
    let temp_dir = TempDir::new().unwrap();
    let input = common::write_allocation_csv(temp_dir.path(), "10,3,7\n\n5,2,2\n");
    let output = temp_dir.path().join("output.txt");

    allocate::process_csv_file(&input, &output).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("Row 1:"));
    assert!(
        contents.contains("Row 3:"),
        "record on line 3 must be numbered by file position:\n{}",
        contents
    );
    assert!(!contents.contains("Row 2:"));
}

#[test]
fn run_with_missing_input_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("does_not_exist.csv");

    allocate::run(&input).unwrap();

    assert!(!temp_dir.path().join("output.txt").exists());
}

#[test]
fn cli_writes_report_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = common::write_allocation_csv(temp_dir.path(), "10,3,7\n");

    Command::cargo_bin("farelens")
        .unwrap()
        .args(["allocate", "--input-file", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results successfully written"));

    let output = temp_dir.path().join("output.txt");
    assert!(output.exists());
    let contents = std::fs::read_to_string(output).unwrap();
    assert!(contents.contains("Best Combination: [3.0, 7.0] -> Sum: 10"));
}

#[test]
fn cli_missing_file_exits_normally() {
    let missing = Path::new("definitely/not/here/input.csv");

    Command::cargo_bin("farelens")
        .unwrap()
        .args(["allocate", "--input-file", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("was not found"));
}
