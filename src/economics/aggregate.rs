//! Median-based aggregation by rate-code category

use polars::prelude::*;
use serde::Serialize;

use super::features::{RATE_CODE_ID, RATE_PER_MILE, RATE_PER_MINUTE};
use super::rate_code::rate_code_name;

/// One row of either aggregate table: per-mile and per-minute rates for
/// a rate-code category, plus the group size.
#[derive(Debug, Clone, Serialize)]
pub struct RateCodeEconomics {
    pub rate_code_id: i64,
    pub rate_per_mile: f64,
    pub rate_per_minute: f64,
    pub trip_count: usize,
    pub rate_code_name: String,
}

/// Per-group median of both effective rates, sorted by rate-code id.
pub fn median_unit_economics(features: &DataFrame) -> PolarsResult<Vec<RateCodeEconomics>> {
    let grouped = features
        .clone()
        .lazy()
        .group_by([col(RATE_CODE_ID)])
        .agg([
            col(RATE_PER_MILE).median().alias("median_rate_per_mile"),
            col(RATE_PER_MINUTE).median().alias("median_rate_per_minute"),
            len().alias("trip_count"),
        ])
        .sort([RATE_CODE_ID], Default::default())
        .collect()?;

    let ids = grouped.column(RATE_CODE_ID)?.cast(&DataType::Int64)?;
    let ids = ids.i64()?;
    let per_mile = grouped.column("median_rate_per_mile")?.f64()?;
    let per_minute = grouped.column("median_rate_per_minute")?.f64()?;
    let counts = grouped.column("trip_count")?.cast(&DataType::UInt64)?;
    let counts = counts.u64()?;

    let mut rows = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        // Groups with a null rate code carry no category; skip them.
        let Some(code) = ids.get(i) else { continue };
        rows.push(RateCodeEconomics {
            rate_code_id: code,
            rate_per_mile: per_mile.get(i).unwrap_or(f64::NAN),
            rate_per_minute: per_minute.get(i).unwrap_or(f64::NAN),
            trip_count: counts.get(i).unwrap_or(0) as usize,
            rate_code_name: rate_code_name(code).to_string(),
        });
    }

    Ok(rows)
}
