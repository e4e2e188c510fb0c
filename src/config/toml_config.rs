use crate::config::{OutputFormat, DEFAULT_EXTENSION};
use crate::domain::model::RatingBounds;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_finite, validate_non_empty_string, Validate};
use serde::Deserialize;
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub ingest: Option<IngestConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestConfig {
    pub extension: Option<String>,
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content =
            std::fs::read_to_string(path_ref).map_err(|e| ReportError::ConfigError {
                message: format!("cannot read settings file {}: {}", path_ref.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ReportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn extension(&self) -> &str {
        self.ingest
            .as_ref()
            .and_then(|i| i.extension.as_deref())
            .unwrap_or(DEFAULT_EXTENSION)
    }

    pub fn rating_bounds(&self) -> RatingBounds {
        let defaults = RatingBounds::default();
        let ingest = self.ingest.as_ref();
        RatingBounds::new(
            ingest.and_then(|i| i.rating_min).unwrap_or(defaults.min),
            ingest.and_then(|i| i.rating_max).unwrap_or(defaults.max),
        )
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.format)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let bounds = self.rating_bounds();
        validate_finite("rating_min", bounds.min)?;
        validate_finite("rating_max", bounds.max)?;
        if bounds.min > bounds.max {
            return Err(ReportError::InvalidConfigValueError {
                field: "rating_min".to_string(),
                value: bounds.min.to_string(),
                reason: format!("must not exceed rating_max ({})", bounds.max),
            });
        }

        let extension = self.extension();
        validate_non_empty_string("extension", extension)?;
        if extension.starts_with('.') {
            return Err(ReportError::InvalidConfigValueError {
                field: "extension".to_string(),
                value: extension.to_string(),
                reason: "give the extension without a leading dot".to_string(),
            });
        }
        Ok(())
    }
}
