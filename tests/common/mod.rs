//! Shared test utilities and fixture generators

use chrono::NaiveDate;
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Build a millisecond-precision datetime column from (hour, minute)
/// pairs on a fixed day.
pub fn datetime_column(name: &str, times: &[(u32, u32)]) -> Column {
    let ms: Vec<i64> = times
        .iter()
        .map(|&(h, m)| {
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(h, m, 0)
                .unwrap()
                .and_utc()
                .timestamp_millis()
        })
        .collect();

    Column::new(name.into(), ms)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .unwrap()
}

/// Trip fixture: four clean trips across two rate codes, plus one
/// zero-distance trip and one negative-total trip that the filter must
/// drop.
///
/// Clean trips after filtering:
/// - code 1: (2 mi, 10 min, net 12), (5 mi, 20 min, net 23)
/// - code 2: (3 mi, 15 min, net 16), (10 mi, 30 min, net 43)
pub fn create_trip_dataframe() -> DataFrame {
    let mut df = df! {
        "trip_distance" => [2.0f64, 5.0, 3.0, 10.0, 0.0, 4.0],
        "fare_amount" => [10.0f64, 21.0, 14.0, 41.0, 5.0, 18.0],
        "tip_amount" => [2.0f64, 4.0, 1.0, 5.0, 0.0, 2.0],
        "total_amount" => [14.0f64, 27.0, 17.0, 48.0, 6.0, -20.0],
        "RatecodeID" => [1i64, 1, 2, 2, 1, 2],
    }
    .unwrap();

    df.with_column(datetime_column(
        "tpep_pickup_datetime",
        &[(8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0)],
    ))
    .unwrap();
    df.with_column(datetime_column(
        "tpep_dropoff_datetime",
        &[(8, 10), (9, 20), (10, 15), (11, 30), (12, 5), (13, 10)],
    ))
    .unwrap();

    df
}

/// Write a DataFrame as a parquet file under `dir`.
pub fn write_parquet(dir: &Path, name: &str, df: &mut DataFrame) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();
    path
}

/// Write raw CSV contents as `input.csv` under `dir`.
pub fn write_allocation_csv(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("input.csv");
    std::fs::write(&path, contents).unwrap();
    path
}
