//! Trip feature engineering over lazily scanned parquet files
//!
//! All source files in the data folder are scanned as one logical
//! dataset. Derivations and filtering stay lazy until `collect_features`
//! materializes the frame.

use std::path::Path;

use glob::glob;
use polars::prelude::*;

use super::error::EconomicsError;
use super::rate_code::rate_code_name;

pub const PICKUP: &str = "tpep_pickup_datetime";
pub const DROPOFF: &str = "tpep_dropoff_datetime";
pub const DISTANCE: &str = "trip_distance";
pub const FARE: &str = "fare_amount";
pub const TIP: &str = "tip_amount";
pub const TOTAL: &str = "total_amount";
pub const RATE_CODE_ID: &str = "RatecodeID";

pub const RATE_CODE_NAME: &str = "RateCodeName";
pub const DURATION_MINUTES: &str = "trip_duration_minutes";
pub const NET_TOTAL: &str = "net_total_amount";
pub const RATE_PER_MILE: &str = "net_effective_rate_per_mile";
pub const RATE_PER_MINUTE: &str = "net_effective_rate_per_minute";

const REQUIRED_COLUMNS: [&str; 7] = [PICKUP, DROPOFF, DISTANCE, FARE, TIP, TOTAL, RATE_CODE_ID];

/// Scan every `*.parquet` file in `folder` into one LazyFrame.
pub fn scan_trip_files(folder: &Path) -> Result<LazyFrame, EconomicsError> {
    let pattern = folder.join("*.parquet");
    let mut paths: Vec<_> = glob(&pattern.to_string_lossy())?
        .filter_map(Result::ok)
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(EconomicsError::NoTripFiles(folder.to_path_buf()));
    }

    let frames = paths
        .iter()
        .map(|p| LazyFrame::scan_parquet(p, ScanArgsParquet::default()))
        .collect::<PolarsResult<Vec<_>>>()?;

    Ok(concat(frames, UnionArgs::default())?)
}

/// Derive duration, net totals, and effective rates, and filter out
/// degenerate trips.
///
/// Every surviving row satisfies distance > 0, duration > 0, and
/// total amount > 0, which also guards the rate divisions.
pub fn engineer_features(lf: LazyFrame) -> LazyFrame {
    lf.with_columns([
        ((col(DROPOFF) - col(PICKUP))
            .dt()
            .total_seconds()
            .cast(DataType::Float64)
            / lit(60.0))
        .alias(DURATION_MINUTES),
        (col(TOTAL) - col(TIP)).alias(NET_TOTAL),
    ])
    .filter(
        col(DISTANCE)
            .gt(lit(0.0))
            .and(col(DURATION_MINUTES).gt(lit(0.0)))
            .and(col(TOTAL).gt(lit(0.0))),
    )
    .with_columns([
        (col(NET_TOTAL) / col(DISTANCE)).alias(RATE_PER_MILE),
        (col(NET_TOTAL) / col(DURATION_MINUTES)).alias(RATE_PER_MINUTE),
    ])
}

/// Attach the human-readable rate-code name column. Null codes stay null.
pub fn with_rate_code_names(df: &DataFrame) -> PolarsResult<DataFrame> {
    let ids = df.column(RATE_CODE_ID)?.cast(&DataType::Int64)?;
    let names: StringChunked = ids
        .i64()?
        .into_iter()
        .map(|code| code.map(rate_code_name))
        .collect();

    let mut out = df.clone();
    out.with_column(names.into_series().with_name(RATE_CODE_NAME.into()))?;
    Ok(out)
}

/// Full feature pipeline: scan, verify schema, derive, filter, collect,
/// and attach rate-code names.
pub fn collect_features(folder: &Path) -> Result<DataFrame, EconomicsError> {
    let lf = scan_trip_files(folder)?;
    ensure_required_columns(&lf)?;
    let df = engineer_features(lf).collect()?;
    Ok(with_rate_code_names(&df)?)
}

fn ensure_required_columns(lf: &LazyFrame) -> Result<(), EconomicsError> {
    let schema = lf.clone().collect_schema()?;
    for name in REQUIRED_COLUMNS {
        if !schema.contains(name) {
            return Err(EconomicsError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}
