//! Row ingestion: reads validated CSV files into [`Record`]s.
//!
//! Row and file level defects are logged and skipped. Failing to open or
//! decode a file, or ending up with no records at all, is fatal.

use crate::domain::model::{RatingBounds, Record, RecordRejection};
use crate::utils::error::{ReportError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;

pub const BRAND_COLUMN: &str = "brand";
pub const RATING_COLUMN: &str = "rating";

/// Header row is row 1, so the first data row is row 2.
const FIRST_DATA_ROW: usize = 2;

enum RowOutcome {
    Accepted(Record),
    Skipped,
    MalformedRating,
    OutOfRange(f64),
}

/// Reads every file in order and returns all accepted records.
pub fn ingest_files(paths: &[String], bounds: RatingBounds) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for path in paths {
        let accepted = ingest_file(path, bounds)?;
        tracing::debug!("Accepted {} records from {}", accepted.len(), path);
        records.extend(accepted);
    }

    if records.is_empty() {
        return Err(ReportError::NoRecords);
    }

    tracing::info!("Ingested {} records from {} files", records.len(), paths.len());
    Ok(records)
}

/// Reads a single file. The file handle is released when this returns.
pub fn ingest_file(path: &str, bounds: RatingBounds) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| ReportError::from_open(path, e))?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| ReportError::from_csv(path, e))?
        .clone();

    let (Some(brand_idx), Some(rating_idx)) = (
        column_index(&headers, BRAND_COLUMN),
        column_index(&headers, RATING_COLUMN),
    ) else {
        tracing::warn!(
            "file {} is missing required columns '{}' or '{}'",
            path,
            BRAND_COLUMN,
            RATING_COLUMN
        );
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    for (offset, result) in reader.records().enumerate() {
        let row_num = offset + FIRST_DATA_ROW;
        let row = result.map_err(|e| ReportError::from_csv(path, e))?;

        match parse_row(&headers, &row, brand_idx, rating_idx, bounds) {
            RowOutcome::Accepted(record) => records.push(record),
            RowOutcome::Skipped => {}
            RowOutcome::MalformedRating => {
                tracing::warn!(
                    "skipped row {} in file {}: malformed rating format",
                    row_num,
                    path
                );
            }
            RowOutcome::OutOfRange(rating) => {
                tracing::warn!(
                    "invalid rating {:?} in row {} of file {}",
                    rating,
                    row_num,
                    path
                );
            }
        }
    }

    if records.is_empty() {
        tracing::warn!("no valid data found in file {}", path);
    }

    Ok(records)
}

/// Duplicate header names resolve to the last occurrence.
fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == name)
        .last()
        .map(|(idx, _)| idx)
}

fn parse_row(
    headers: &StringRecord,
    row: &StringRecord,
    brand_idx: usize,
    rating_idx: usize,
    bounds: RatingBounds,
) -> RowOutcome {
    let (Some(raw_brand), Some(raw_rating)) = (row.get(brand_idx), row.get(rating_idx)) else {
        return RowOutcome::Skipped;
    };
    if raw_brand.is_empty() || raw_rating.is_empty() {
        return RowOutcome::Skipped;
    }

    let brand = raw_brand.trim();
    let rating_str = raw_rating.trim();
    if brand.is_empty() || rating_str.is_empty() {
        return RowOutcome::Skipped;
    }

    let Ok(rating) = rating_str.parse::<f64>() else {
        return RowOutcome::MalformedRating;
    };

    let fields: HashMap<String, String> = headers
        .iter()
        .zip(row.iter())
        .filter(|(name, _)| *name != BRAND_COLUMN && *name != RATING_COLUMN)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    match Record::try_new(brand, rating, bounds, fields) {
        Ok(record) => RowOutcome::Accepted(record),
        Err(RecordRejection::OutOfRange(value)) => RowOutcome::OutOfRange(value),
        Err(RecordRejection::EmptyBrand) => RowOutcome::Skipped,
    }
}
