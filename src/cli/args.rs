//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Farelens - subset-sum allocation and taxi unit-economics reports
#[derive(Parser, Debug)]
#[command(name = "farelens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find, for each CSV row, the subset of candidate values summing
    /// closest to the row's target without exceeding it
    Allocate {
        /// Path to the input CSV file.
        /// The report is written next to it as 'output.txt'.
        #[arg(long, default_value = "data/Q1/input.csv")]
        input_file: PathBuf,
    },

    /// Compute per-rate-code unit economics from parquet trip records
    /// and render comparison charts
    Economics {
        /// Path to the folder containing input parquet files.
        /// Charts are written into its 'output' subfolder.
        #[arg(long, default_value = "data/Q2")]
        data_path: PathBuf,
    },
}

/// Derive the allocation report path: always the input's sibling `output.txt`.
pub fn allocation_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output.txt")
}

/// Derive the chart output folder for the economics pipeline.
pub fn economics_output_dir(data_path: &Path) -> PathBuf {
    data_path.join("output")
}
