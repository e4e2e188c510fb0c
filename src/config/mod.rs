pub mod toml_config;

use crate::core::registry;
use crate::core::ConfigProvider;
use crate::domain::model::RatingBounds;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use toml_config::TomlConfig;

pub const DEFAULT_EXTENSION: &str = "csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "rating-report")]
#[command(about = "Builds rating reports from product CSV exports")]
pub struct CliConfig {
    /// CSV files to process
    #[arg(long, num_args = 1.., required = true)]
    pub files: Vec<String>,

    /// Report type
    #[arg(long, value_parser = PossibleValuesParser::new(registry::report_names()))]
    pub report: String,

    /// Output format, overrides the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges the command line with the optional settings file.
    pub fn resolve(&self) -> Result<ReportSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file_config.validate()?;

        let settings = ReportSettings {
            files: self.files.clone(),
            report: self.report.clone(),
            format: self.format.unwrap_or_else(|| file_config.output_format()),
            bounds: file_config.rating_bounds(),
            extension: file_config.extension().to_string(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub files: Vec<String>,
    pub report: String,
    pub format: OutputFormat,
    pub bounds: RatingBounds,
    pub extension: String,
}

impl ReportSettings {
    pub fn new(files: Vec<String>, report: &str) -> Self {
        Self {
            files,
            report: report.to_string(),
            format: OutputFormat::default(),
            bounds: RatingBounds::default(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl Validate for ReportSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("extension", &self.extension)?;
        if registry::lookup(&self.report).is_none() {
            return Err(ReportError::UnknownReport {
                name: self.report.clone(),
            });
        }
        Ok(())
    }
}

impl ConfigProvider for ReportSettings {
    fn input_files(&self) -> &[String] {
        &self.files
    }

    fn report_name(&self) -> &str {
        &self.report
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn rating_bounds(&self) -> RatingBounds {
        self.bounds
    }

    fn file_extension(&self) -> &str {
        &self.extension
    }
}
