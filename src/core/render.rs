//! Report rendering. The column names `brand` and `average_rating` are
//! shared by every format.

use crate::config::OutputFormat;
use crate::domain::model::ReportRow;
use crate::utils::error::{ReportError, Result};
use std::io::Write;

const BRAND_HEADER: &str = "brand";
const AVERAGE_HEADER: &str = "average_rating";

pub fn render(rows: &[ReportRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Csv => render_csv(rows),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

/// Writes a rendered report followed by a newline.
pub fn write_report<W: Write>(out: &mut W, report: &str) -> std::io::Result<()> {
    writeln!(out, "{}", report)?;
    out.flush()
}

/// Bordered text table; text left-aligned, numbers right-aligned.
pub fn render_table(rows: &[ReportRow]) -> String {
    let cells: Vec<(&str, String)> = rows
        .iter()
        .map(|row| (row.brand.as_str(), format!("{:.2}", row.average)))
        .collect();

    let brand_width = cells
        .iter()
        .map(|(brand, _)| brand.chars().count())
        .chain(std::iter::once(BRAND_HEADER.len()))
        .max()
        .unwrap_or_default();
    let average_width = cells
        .iter()
        .map(|(_, avg)| avg.len())
        .chain(std::iter::once(AVERAGE_HEADER.len()))
        .max()
        .unwrap_or_default();

    let rule = |edge: char, joint: char| {
        format!(
            "{edge}{}{joint}{}{edge}",
            "-".repeat(brand_width + 2),
            "-".repeat(average_width + 2)
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule('+', '+'));
    lines.push(format!(
        "| {:<brand_width$} | {:>average_width$} |",
        BRAND_HEADER, AVERAGE_HEADER
    ));
    lines.push(rule('|', '+'));
    for (brand, average) in &cells {
        lines.push(format!(
            "| {:<brand_width$} | {:>average_width$} |",
            brand, average
        ));
    }
    lines.push(rule('+', '+'));

    lines.join("\n")
}

fn render_csv(rows: &[ReportRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record([BRAND_HEADER, AVERAGE_HEADER])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| ReportError::RenderError {
        message: e.to_string(),
    })?;
    let text = String::from_utf8(bytes).map_err(|e| ReportError::RenderError {
        message: e.to_string(),
    })?;

    Ok(text.trim_end().to_string())
}
