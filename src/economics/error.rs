//! Structured errors for the unit-economics pipeline

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EconomicsError {
    #[error("no parquet files found in {}", .0.display())]
    NoTripFiles(PathBuf),

    #[error("required column '{0}' missing from trip data")]
    MissingColumn(String),

    #[error("invalid data folder pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}
