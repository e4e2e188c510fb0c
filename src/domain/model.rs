use serde::Serialize;
use std::collections::HashMap;

/// Closed interval a rating must fall into to be accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBounds {
    pub min: f64,
    pub max: f64,
}

impl RatingBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN is never contained.
    pub fn contains(&self, rating: f64) -> bool {
        rating >= self.min && rating <= self.max
    }
}

impl Default for RatingBounds {
    fn default() -> Self {
        Self { min: 0.0, max: 5.0 }
    }
}

/// Why a row could not become a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordRejection {
    EmptyBrand,
    OutOfRange(f64),
}

/// One validated input row.
///
/// `brand` is trimmed and non-empty, `rating` lies inside the bounds it was
/// built with. The remaining columns of the source row are kept verbatim in
/// `fields`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) brand: String,
    pub(crate) rating: f64,
    pub(crate) fields: HashMap<String, String>,
}

impl Record {
    pub fn try_new(
        brand: &str,
        rating: f64,
        bounds: RatingBounds,
        fields: HashMap<String, String>,
    ) -> Result<Self, RecordRejection> {
        let brand = brand.trim();
        if brand.is_empty() {
            return Err(RecordRejection::EmptyBrand);
        }
        if !bounds.contains(rating) {
            return Err(RecordRejection::OutOfRange(rating));
        }
        Ok(Self {
            brand: brand.to_string(),
            rating,
            fields,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Passthrough column from the source row.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// One line of the average-rating report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub brand: String,
    #[serde(rename = "average_rating")]
    pub average: f64,
}
