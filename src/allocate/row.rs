//! Row cleaning and per-row worker
//!
//! A worker is a pure function from an indexed CSV record to an optional
//! report fragment: `None` for empty records, a one-line skip notice for
//! unparseable rows, or a formatted result block otherwise.

use csv::StringRecord;

use super::solver::solve_subset_sum;

/// Clean one record: blank cells coerce to zero, anything else must
/// parse as a float. Returns `None` when any cell fails to parse.
pub fn clean_row(record: &StringRecord) -> Option<Vec<f64>> {
    record
        .iter()
        .map(|cell| {
            if cell.is_empty() {
                Ok(0.0)
            } else {
                cell.trim().parse::<f64>()
            }
        })
        .collect::<Result<Vec<f64>, _>>()
        .ok()
}

/// Process a single row. `line` is the 1-based line the record starts on
/// in the input file; blank lines still count, so the reported row number
/// always reflects the record's position in the file.
pub fn process_row(line: u64, record: &StringRecord) -> Option<String> {
    if record.is_empty() {
        return None;
    }

    let Some(cleaned) = clean_row(record) else {
        return Some(format!(
            "Row {}: Contains non-float values. Skipping.",
            line
        ));
    };

    let big_number = cleaned[0];
    let small_numbers = &cleaned[1..];

    let (combination, total) = solve_subset_sum(big_number, small_numbers);

    Some(format!(
        "Row {}:\n  Big Number: {}\n  Small Numbers (options): {:?}\n  Best Combination: {:?} -> Sum: {}\n",
        line,
        big_number,
        small_numbers,
        combination,
        total
    ))
}
