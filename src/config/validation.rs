//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Largest accepted encoding sample.
const MAX_SAMPLE_SIZE: usize = 1024 * 1024;

/// Smallest useful filename limit: one character plus one more.
const MIN_MAX_LENGTH: usize = 2;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_separator(&config.naming.separator)?;
    validate_max_length(config.naming.max_length)?;
    validate_sample_size(config.encoding.sample_size)?;
    config.encoding_detector()?;
    validate_staging_dir(config)?;

    Ok(())
}

/// Validate a slug separator.
pub fn validate_separator(separator: &str) -> Result<()> {
    if separator.is_empty() {
        return Err(Error::ConfigValidation {
            field: "naming.separator".to_string(),
            message: "Separator cannot be empty".to_string(),
        });
    }

    if let Some(c) = separator
        .chars()
        .find(|&c| matches!(c, '.' | '/' | '\\') || c.is_alphanumeric() || c.is_control())
    {
        return Err(Error::ConfigValidation {
            field: "naming.separator".to_string(),
            message: format!("Separator '{}' contains forbidden character {:?}", separator, c),
        });
    }

    Ok(())
}

/// Validate the maximum filename length.
pub fn validate_max_length(max_length: Option<usize>) -> Result<()> {
    match max_length {
        Some(max) if max < MIN_MAX_LENGTH => Err(Error::ConfigValidation {
            field: "naming.max_length".to_string(),
            message: format!(
                "Maximum length must be at least {} (got {})",
                MIN_MAX_LENGTH, max
            ),
        }),
        _ => Ok(()),
    }
}

/// Validate the encoding sample size.
pub fn validate_sample_size(sample_size: usize) -> Result<()> {
    if sample_size == 0 || sample_size > MAX_SAMPLE_SIZE {
        return Err(Error::ConfigValidation {
            field: "encoding.sample_size".to_string(),
            message: format!(
                "Sample size must be between 1 and {} bytes (got {})",
                MAX_SAMPLE_SIZE, sample_size
            ),
        });
    }

    Ok(())
}

fn validate_staging_dir(config: &Config) -> Result<()> {
    let Some(dir) = &config.upload.staging_dir else {
        return Ok(());
    };

    if dir.exists() && !dir.is_dir() {
        return Err(Error::ConfigValidation {
            field: "upload.staging_dir".to_string(),
            message: format!("{} is not a directory", dir.display()),
        });
    }

    Ok(())
}
