//! Allocation pipeline: CSV rows in, best-subset report out
//!
//! Each input row carries a target value followed by candidate values.
//! Rows are independent, so the per-row search runs on a rayon parallel
//! map; collection preserves input order so the report matches the file.

mod row;
mod solver;

pub use row::{clean_row, process_row};
pub use solver::solve_subset_sum;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::cli::allocation_output_path;
use crate::utils::{create_progress_bar, print_error, print_info, print_success};

/// Run the allocation pipeline for one input file.
///
/// A missing input file is reported and treated as a normal exit; the
/// report is not written in that case.
pub fn run(input: &Path) -> Result<()> {
    if !input.exists() {
        print_error(&format!("Error: The file {} was not found.", input.display()));
        return Ok(());
    }

    let output = allocation_output_path(input);
    print_info(&format!(
        "Processing file: {} with parallel workers...",
        input.display()
    ));
    process_csv_file(input, &output)?;
    print_success(&format!(
        "Results successfully written to {}",
        output.display()
    ));
    Ok(())
}

/// Read every CSV record, solve each row in parallel, and write the
/// report blocks in input order.
pub fn process_csv_file(input: &Path, output: &Path) -> Result<()> {
    // Rows are ragged (varying candidate counts), so field-count checks
    // are disabled and no header is assumed.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input)
        .with_context(|| format!("Failed to open CSV file: {}", input.display()))?;

    // Record positions carry the real 1-based line numbers, so blank
    // lines (which the reader drops) still count toward row numbering.
    let records: Vec<(u64, csv::StringRecord)> = reader
        .records()
        .enumerate()
        .map(|(i, result)| {
            result.map(|record| {
                let line = record.position().map(|p| p.line()).unwrap_or(i as u64 + 1);
                (line, record)
            })
        })
        .collect::<Result<_, _>>()
        .with_context(|| format!("Failed to read CSV records from {}", input.display()))?;

    let pb = create_progress_bar(records.len() as u64, "   Solving rows");

    // Ordered fork/join: par_iter + collect keeps results in submission
    // order, so a slow or skipped row never reorders the report.
    let results: Vec<Option<String>> = records
        .par_iter()
        .map(|(line, record)| {
            let outcome = process_row(*line, record);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    for result in results.into_iter().flatten() {
        writeln!(writer, "{}", result)
            .with_context(|| format!("Failed to write to {}", output.display()))?;
    }
    writer.flush()?;

    Ok(())
}
