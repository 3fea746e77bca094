//! JSON export of aggregate tables

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use super::aggregate::RateCodeEconomics;

/// Write the aggregate rows as pretty-printed JSON next to the chart.
pub fn export_economics_json(rows: &[RateCodeEconomics], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON export: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), rows)
        .with_context(|| format!("Failed to write JSON export: {}", path.display()))?;
    Ok(())
}
