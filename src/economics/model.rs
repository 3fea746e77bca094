//! Per-group linear rate model
//!
//! Fits `fare ≈ β₁·distance + β₂·duration` for each rate-code group,
//! with no intercept and non-negative coefficients. The coefficients are
//! read as effective per-mile and per-minute rates. This is a modeling
//! convenience layered on the feature frame, not core pipeline logic;
//! swapping in a different estimator only touches this module.

use nalgebra::{DMatrix, DVector};
use polars::prelude::*;

use super::aggregate::RateCodeEconomics;
use super::features::{DISTANCE, DURATION_MINUTES, FARE, RATE_CODE_ID};
use super::rate_code::rate_code_name;

/// Fit one model per rate-code category, sorted by the lowest rate-code
/// id in each category. Grouping is by the human-readable name, so every
/// unrecognized code lands in the single "Unknown" category.
///
/// Groups with fewer than two complete observations are skipped: the
/// two-parameter regression is undefined there.
pub fn model_unit_economics(features: &DataFrame) -> PolarsResult<Vec<RateCodeEconomics>> {
    let ids_col = features.column(RATE_CODE_ID)?.cast(&DataType::Int64)?;
    let ids = ids_col.i64()?;

    let mut codes: Vec<i64> = ids.into_iter().flatten().collect();
    codes.sort_unstable();
    codes.dedup();

    // Codes arrive ascending, so each category's member list starts with
    // its lowest id and the group order is already the sort order.
    let mut categories: Vec<(&'static str, Vec<i64>)> = Vec::new();
    for code in codes {
        let name = rate_code_name(code);
        match categories.iter_mut().find(|(n, _)| *n == name) {
            Some((_, members)) => members.push(code),
            None => categories.push((name, vec![code])),
        }
    }

    let mut rows = Vec::new();
    for (name, members) in categories {
        let mask: BooleanChunked = ids
            .into_iter()
            .map(|code| code.is_some_and(|c| members.contains(&c)))
            .collect();
        let group = features.filter(&mask)?;

        let distance = group.column(DISTANCE)?.cast(&DataType::Float64)?;
        let duration = group.column(DURATION_MINUTES)?.cast(&DataType::Float64)?;
        let fare = group.column(FARE)?.cast(&DataType::Float64)?;

        let obs: Vec<[f64; 3]> = distance
            .f64()?
            .into_iter()
            .zip(duration.f64()?)
            .zip(fare.f64()?)
            .filter_map(|((d, m), f)| Some([d?, m?, f?]))
            .collect();

        if obs.len() < 2 {
            continue;
        }
        let Some((per_mile, per_minute)) = fit_rate_coefficients(&obs) else {
            continue;
        };

        rows.push(RateCodeEconomics {
            rate_code_id: members[0],
            rate_per_mile: per_mile,
            rate_per_minute: per_minute,
            trip_count: obs.len(),
            rate_code_name: name.to_string(),
        });
    }

    Ok(rows)
}

/// Non-negative least squares for the two-column design matrix.
///
/// Solves the unconstrained problem first; a negative coefficient is
/// clamped to zero and the remaining single column refitted (the
/// active-set step for this two-variable case).
fn fit_rate_coefficients(obs: &[[f64; 3]]) -> Option<(f64, f64)> {
    let n = obs.len();
    let x = DMatrix::from_fn(n, 2, |r, c| obs[r][c]);
    let y = DVector::from_iterator(n, obs.iter().map(|o| o[2]));

    let beta = solve_least_squares(&x, &y)?;
    let (b1, b2) = (beta[0], beta[1]);

    if b1 >= 0.0 && b2 >= 0.0 {
        return Some((b1, b2));
    }
    if b1 < 0.0 && b2 < 0.0 {
        return Some((0.0, 0.0));
    }
    if b1 < 0.0 {
        Some((0.0, fit_single_column(obs, 1)))
    } else {
        Some((fit_single_column(obs, 0), 0.0))
    }
}

/// One-column least squares through the origin, clamped at zero.
fn fit_single_column(obs: &[[f64; 3]], column: usize) -> f64 {
    let xx: f64 = obs.iter().map(|o| o[column] * o[column]).sum();
    if xx == 0.0 {
        return 0.0;
    }
    let xy: f64 = obs.iter().map(|o| o[column] * o[2]).sum();
    (xy / xx).max(0.0)
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Near-collinear distance/duration columns show up in short-trip
    // groups, so progressively looser tolerances are tried.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}
