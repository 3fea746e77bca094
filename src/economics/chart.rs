//! Two-panel bar chart rendering to static HTML
//!
//! Plotters draws into an in-memory SVG string; the SVG is wrapped in a
//! minimal HTML page so the artifact opens directly in a browser.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::aggregate::RateCodeEconomics;

const PANEL_WIDTH: u32 = 600;
const PANEL_HEIGHT: u32 = 500;

const PER_MILE_COLOR: RGBColor = RGBColor(173, 216, 230);
const PER_MINUTE_COLOR: RGBColor = RGBColor(240, 128, 128);

/// Render both metrics side by side and write the page to `path`.
pub fn render_unit_economics_chart(
    rows: &[RateCodeEconomics],
    title: &str,
    path: &Path,
) -> Result<()> {
    let svg = draw_panels(rows, title).map_err(|e| anyhow!("chart rendering failed: {}", e))?;
    let html = wrap_html(title, &svg);
    fs::write(path, html)
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;
    Ok(())
}

fn draw_panels(
    rows: &[RateCodeEconomics],
    title: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (PANEL_WIDTH * 2, PANEL_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(title, ("sans-serif", 24))?;

        let panels = root.split_evenly((1, 2));
        draw_bar_panel(
            &panels[0],
            rows,
            |r| r.rate_per_mile,
            "Rate per Mile ($)",
            PER_MILE_COLOR,
        )?;
        draw_bar_panel(
            &panels[1],
            rows,
            |r| r.rate_per_minute,
            "Rate per Minute ($)",
            PER_MINUTE_COLOR,
        )?;

        root.present()?;
    }
    Ok(svg)
}

fn draw_bar_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    rows: &[RateCodeEconomics],
    value: impl Fn(&RateCodeEconomics) -> f64,
    y_label: &str,
    color: RGBColor,
) -> Result<(), Box<dyn std::error::Error>> {
    let y_max = rows
        .iter()
        .map(|r| value(r))
        .fold(0.0_f64, f64::max)
        .max(1e-9)
        * 1.15;
    let n = rows.len().max(1);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 70)
        .build_cartesian_2d((0..n).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|seg| segment_label(seg, rows))
        .x_desc("Rate Code")
        .y_desc(y_label)
        .axis_desc_style(("sans-serif", 14))
        .label_style(("sans-serif", 11))
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), value(row)),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 12, 12);
        bar
    }))?;

    // Value labels sit just above each bar.
    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        Text::new(
            format!("{:.2}", value(row)),
            (SegmentValue::CenterOf(i), value(row) + y_max * 0.02),
            ("sans-serif", 12),
        )
    }))?;

    Ok(())
}

fn segment_label(seg: &SegmentValue<usize>, rows: &[RateCodeEconomics]) -> String {
    match seg {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => rows
            .get(*i)
            .map(|r| r.rate_code_name.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

fn wrap_html(title: &str, svg: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n\
         <body>\n{svg}\n\
         <p style=\"font-family:sans-serif;color:#666\">Generated {timestamp}</p>\n\
         </body>\n</html>\n",
        title = title,
        svg = svg,
        timestamp = Local::now().format("%Y-%m-%d %H:%M:%S"),
    )
}
