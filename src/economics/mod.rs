//! Unit-economics pipeline: parquet trip records in, charts out
//!
//! One pass over the data folder feeds two parallel analyses grouped by
//! rate-code category: per-group medians of the effective rates, and a
//! per-group linear rate model. Each analysis renders to its own HTML
//! chart (with a JSON table alongside).

mod aggregate;
mod chart;
mod error;
mod export;
mod features;
mod model;
mod rate_code;

pub use aggregate::{median_unit_economics, RateCodeEconomics};
pub use chart::render_unit_economics_chart;
pub use error::EconomicsError;
pub use export::export_economics_json;
pub use features::{
    collect_features, engineer_features, scan_trip_files, with_rate_code_names, DISTANCE,
    DROPOFF, DURATION_MINUTES, FARE, NET_TOTAL, PICKUP, RATE_CODE_ID, RATE_CODE_NAME,
    RATE_PER_MILE, RATE_PER_MINUTE, TIP, TOTAL,
};
pub use model::model_unit_economics;
pub use rate_code::{rate_code_name, UNKNOWN_RATE_CODE};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};

use crate::cli::economics_output_dir;
use crate::utils::{create_spinner, finish_with_success, print_step_header, print_success};

/// Run the unit-economics pipeline over one data folder.
pub fn run(data_path: &Path) -> Result<()> {
    let output_dir = economics_output_dir(data_path);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output folder: {}", output_dir.display()))?;

    let spinner = create_spinner("Scanning parquet trip files...");
    let features = collect_features(data_path)?;
    finish_with_success(
        &spinner,
        &format!("Loaded {} qualifying trips", features.height()),
    );

    println!("{}", features.head(Some(5)));

    print_step_header(1, "Median Unit Economics");
    let median_rows = median_unit_economics(&features)?;
    print_economics_table(&median_rows);
    let chart_path = output_dir.join("median_unit_economics.html");
    render_unit_economics_chart(
        &median_rows,
        "Median Net Effective Rate by Rate Code",
        &chart_path,
    )?;
    export_economics_json(&median_rows, &output_dir.join("median_unit_economics.json"))?;
    print_success(&format!("Plot saved to {}", chart_path.display()));

    print_step_header(2, "Model Coefficient Economics");
    let spinner = create_spinner("Fitting per-group rate models...");
    let model_rows = model_unit_economics(&features)?;
    finish_with_success(
        &spinner,
        &format!("Fitted {} rate-code group(s)", model_rows.len()),
    );
    print_economics_table(&model_rows);
    let chart_path = output_dir.join("model_coefficient_economics.html");
    render_unit_economics_chart(
        &model_rows,
        "Modelled Effective Rate by Rate Code",
        &chart_path,
    )?;
    export_economics_json(
        &model_rows,
        &output_dir.join("model_coefficient_economics.json"),
    )?;
    print_success(&format!("Plot saved to {}", chart_path.display()));

    Ok(())
}

fn print_economics_table(rows: &[RateCodeEconomics]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Rate Code").add_attribute(Attribute::Bold),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Rate / Mile ($)").add_attribute(Attribute::Bold),
        Cell::new("Rate / Minute ($)").add_attribute(Attribute::Bold),
        Cell::new("Trips").add_attribute(Attribute::Bold),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.rate_code_id),
            Cell::new(&row.rate_code_name),
            Cell::new(format!("{:.2}", row.rate_per_mile)),
            Cell::new(format!("{:.2}", row.rate_per_minute)),
            Cell::new(row.trip_count),
        ]);
    }

    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
