pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, OutputFormat, ReportSettings};
pub use crate::core::etl::{run_report, ReportEngine, ReportOutcome};
pub use crate::core::pipeline::CsvReportPipeline;
pub use domain::model::{RatingBounds, Record, ReportRow};
pub use utils::error::{ReportError, Result};
