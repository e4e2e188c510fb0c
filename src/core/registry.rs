//! Report types selectable with `--report`.
//!
//! A new report is one more entry in [`REPORT_HANDLERS`].

use crate::core::aggregate;
use crate::domain::model::{Record, ReportRow};

pub type ReportHandler = fn(&[Record]) -> Vec<ReportRow>;

pub const AVERAGE_RATING: &str = "average-rating";

static REPORT_HANDLERS: &[(&str, ReportHandler)] = &[(AVERAGE_RATING, aggregate::average_rating)];

pub fn lookup(name: &str) -> Option<ReportHandler> {
    REPORT_HANDLERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, handler)| *handler)
}

pub fn report_names() -> Vec<&'static str> {
    REPORT_HANDLERS.iter().map(|(key, _)| *key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rating_is_registered() {
        assert_eq!(report_names(), vec!["average-rating"]);
        assert!(lookup(AVERAGE_RATING).is_some());
        assert!(lookup("Average-Rating").is_none());
        assert!(lookup("median-price").is_none());
    }
}
