//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Locating the config file to use
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, EncodingConfig, NamingConfig, UploadConfig, PROJECT_CONFIG_FILENAME};
pub use validation::validate_config;
