use crate::core::{ingest, registry, render, ConfigProvider, Pipeline, Record, ReportRow};
use crate::utils::error::{ReportError, Result};

/// Reads CSV exports, runs the selected report and renders it.
pub struct CsvReportPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> CsvReportPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C: ConfigProvider> Pipeline for CsvReportPipeline<C> {
    fn extract(&self) -> Result<Vec<Record>> {
        ingest::ingest_files(self.config.input_files(), self.config.rating_bounds())
    }

    fn transform(&self, records: Vec<Record>) -> Result<Vec<ReportRow>> {
        let name = self.config.report_name();
        let handler = registry::lookup(name).ok_or_else(|| ReportError::UnknownReport {
            name: name.to_string(),
        })?;

        tracing::debug!("Running report '{}' over {} records", name, records.len());
        Ok(handler(&records))
    }

    fn load(&self, rows: &[ReportRow]) -> Result<String> {
        render::render(rows, self.config.output_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputFormat, ReportSettings};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_pipeline_stages() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phones.csv");
        fs::write(&path, "brand,rating\napple,4.7\nsamsung,4.5\napple,4.9\n").unwrap();

        let mut settings =
            ReportSettings::new(vec![path.to_str().unwrap().to_string()], "average-rating");
        settings.format = OutputFormat::Csv;
        let pipeline = CsvReportPipeline::new(settings);

        let records = pipeline.extract().unwrap();
        assert_eq!(records.len(), 3);

        let rows = pipeline.transform(records).unwrap();
        assert_eq!(rows[0].brand, "apple");
        assert_eq!(rows[0].average, 4.8);

        let output = pipeline.load(&rows).unwrap();
        assert_eq!(output, "brand,average_rating\napple,4.8\nsamsung,4.5");
    }

    #[test]
    fn test_unknown_report_is_rejected() {
        let settings = ReportSettings::new(vec![], "median-price");
        let pipeline = CsvReportPipeline::new(settings);

        let err = pipeline.transform(Vec::new()).unwrap_err();
        assert!(matches!(err, ReportError::UnknownReport { .. }));
    }
}
