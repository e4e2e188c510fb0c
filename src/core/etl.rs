use crate::core::pipeline::CsvReportPipeline;
use crate::core::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use crate::utils::validation::validate_input_files;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Rendered(String),
    /// Aggregation produced no rows. Not an error.
    Empty,
}

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ReportOutcome> {
        tracing::debug!("Extracting records...");
        let records = self.pipeline.extract()?;
        tracing::debug!("Extracted {} records", records.len());

        let rows = self.pipeline.transform(records)?;
        if rows.is_empty() {
            return Ok(ReportOutcome::Empty);
        }
        tracing::debug!("Report has {} rows", rows.len());

        let output = self.pipeline.load(&rows)?;
        Ok(ReportOutcome::Rendered(output))
    }
}

/// Validates the input files, then runs the CSV report pipeline over them.
pub fn run_report<C: ConfigProvider>(config: C) -> Result<ReportOutcome> {
    validate_input_files(config.input_files(), config.file_extension())?;

    let engine = ReportEngine::new(CsvReportPipeline::new(config));
    engine.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Record, ReportRow};
    use crate::utils::error::ReportError;
    use std::cell::Cell;

    struct MockPipeline {
        rows: Vec<ReportRow>,
        loaded: Cell<bool>,
    }

    impl MockPipeline {
        fn returning(rows: Vec<ReportRow>) -> Self {
            Self {
                rows,
                loaded: Cell::new(false),
            }
        }
    }

    impl Pipeline for MockPipeline {
        fn extract(&self) -> Result<Vec<Record>> {
            Ok(Vec::new())
        }

        fn transform(&self, _records: Vec<Record>) -> Result<Vec<ReportRow>> {
            Ok(self.rows.clone())
        }

        fn load(&self, rows: &[ReportRow]) -> Result<String> {
            self.loaded.set(true);
            Ok(format!("{} rows", rows.len()))
        }
    }

    struct FailingPipeline;

    impl Pipeline for FailingPipeline {
        fn extract(&self) -> Result<Vec<Record>> {
            Err(ReportError::NoRecords)
        }

        fn transform(&self, _records: Vec<Record>) -> Result<Vec<ReportRow>> {
            panic!("transform must not run after a failed extract")
        }

        fn load(&self, _rows: &[ReportRow]) -> Result<String> {
            panic!("load must not run after a failed extract")
        }
    }

    #[test]
    fn test_empty_report_skips_rendering() {
        let engine = ReportEngine::new(MockPipeline::returning(Vec::new()));

        assert_eq!(engine.run().unwrap(), ReportOutcome::Empty);
        assert!(!engine.pipeline.loaded.get());
    }

    #[test]
    fn test_rows_are_rendered() {
        let rows = vec![ReportRow {
            brand: "apple".to_string(),
            average: 4.5,
        }];
        let engine = ReportEngine::new(MockPipeline::returning(rows));

        assert_eq!(
            engine.run().unwrap(),
            ReportOutcome::Rendered("1 rows".to_string())
        );
    }

    #[test]
    fn test_extract_failure_stops_the_run() {
        let engine = ReportEngine::new(FailingPipeline);

        assert!(matches!(engine.run(), Err(ReportError::NoRecords)));
    }
}
