//! Farelens: trip-data analysis toolkit
//!
//! Two independent pipelines behind one CLI: a best-subset allocation
//! search over CSV rows, and a unit-economics report over parquet trip
//! records.

pub mod allocate;
pub mod cli;
pub mod economics;
pub mod utils;
