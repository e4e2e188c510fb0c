use crate::domain::model::{Record, ReportRow};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Average rating per brand, best first.
///
/// Brands are grouped by exact match in order of first appearance, and the
/// stable sort keeps that order among equal averages. Averages are rounded
/// with [`round_to_cents`]. Unusable records are counted and skipped.
pub fn average_rating(records: &[Record]) -> Vec<ReportRow> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        if !is_usable(record) {
            skipped += 1;
            continue;
        }

        match positions.get(record.brand()) {
            Some(&idx) => groups[idx].1.push(record.rating()),
            None => {
                positions.insert(record.brand(), groups.len());
                groups.push((record.brand(), vec![record.rating()]));
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "skipped {} malformed records while computing ratings",
            skipped
        );
    }

    if groups.is_empty() {
        tracing::debug!("No records left to compute ratings from");
        return Vec::new();
    }

    tracing::debug!("Computing averages for {} brands", groups.len());

    let mut report: Vec<ReportRow> = groups
        .into_iter()
        .map(|(brand, ratings)| ReportRow {
            brand: brand.to_string(),
            average: round_to_cents(mean(&ratings)),
        })
        .collect();

    report.sort_by(|a, b| b.average.partial_cmp(&a.average).unwrap_or(Ordering::Equal));
    report
}

fn is_usable(record: &Record) -> bool {
    !record.brand().trim().is_empty() && record.rating().is_finite()
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to two decimals, exact halves to even.
///
/// The tie test is made on the exact value, not on the scaled product: 4.125
/// is exact in binary and becomes 4.12, while 4.335 is stored as 4.33499...
/// and becomes 4.33 even though `4.335 * 100.0` rounds to 433.5.
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    // exact error of the multiplication
    let residual = value.mul_add(100.0, -scaled);

    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 && residual != 0.0 {
        if residual > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round_ties_even()
    };

    rounded / 100.0
}
