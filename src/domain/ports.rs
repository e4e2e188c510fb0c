use crate::config::OutputFormat;
use crate::domain::model::{RatingBounds, Record, ReportRow};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn input_files(&self) -> &[String];
    fn report_name(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn rating_bounds(&self) -> RatingBounds;
    fn file_extension(&self) -> &str;
}

/// Extract records, turn them into report rows, render the rows.
pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Record>>;
    fn transform(&self, records: Vec<Record>) -> Result<Vec<ReportRow>>;
    fn load(&self, rows: &[ReportRow]) -> Result<String>;
}
