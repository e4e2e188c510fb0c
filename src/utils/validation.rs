use crate::utils::error::{ReportError, Result};
use std::fs::File;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks every candidate path and returns the ones that passed.
///
/// Checks run in order per path: regular file, extension, readability. The
/// first failure aborts the whole call; there is no per-file skip here.
pub fn validate_input_files(files: &[String], extension: &str) -> Result<Vec<String>> {
    let mut valid_files = Vec::with_capacity(files.len());

    for file in files {
        if !Path::new(file).is_file() {
            return Err(ReportError::MissingFile { path: file.clone() });
        }
        if !has_extension(file, extension) {
            return Err(ReportError::WrongExtension {
                path: file.clone(),
                expected: extension.to_uppercase(),
            });
        }
        // Opened only to check access; dropped before any parsing happens.
        if File::open(file).is_err() {
            return Err(ReportError::Unreadable { path: file.clone() });
        }

        tracing::debug!("Validated input file {}", file);
        valid_files.push(file.clone());
    }

    if valid_files.is_empty() {
        return Err(ReportError::NoInputFiles);
    }

    Ok(valid_files)
}

/// Case-insensitive suffix match on the raw path string.
pub fn has_extension(file: &str, extension: &str) -> bool {
    file.to_lowercase()
        .ends_with(&format!(".{}", extension.to_lowercase()))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}
