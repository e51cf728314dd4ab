//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::encoding::{EncodingDetector, DEFAULT_CANDIDATES, DEFAULT_SAMPLE_SIZE};
use crate::entry::transfer::DEFAULT_SEPARATOR;
use crate::error::{Error, Result};
use crate::fs::UploadStaging;

/// Config file looked up in the current directory.
pub const PROJECT_CONFIG_FILENAME: &str = "path-entry.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub encoding: EncodingConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

/// Defaults for slugified renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Replacement for unsafe characters and collision suffix separator.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether slugs are lowercased.
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Maximum filename length, extension included.
    #[serde(default)]
    pub max_length: Option<usize>,

    /// Whether renames may replace an existing file.
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            lowercase: true,
            max_length: None,
            overwrite: false,
        }
    }
}

/// Encoding detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Bytes sampled from the start of the file.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Encoding labels accepted as a result.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            candidates: default_candidates(),
        }
    }
}

/// Upload staging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory whose files are treated as uploads.
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|label| label.to_string()).collect()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find the config file to use.
    ///
    /// An explicit path must exist. Otherwise `path-entry.toml` in the
    /// current directory, then `config.toml` in the user config directory.
    pub fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let project = PathBuf::from(PROJECT_CONFIG_FILENAME);
        if project.is_file() {
            return Ok(Some(project));
        }

        if let Some(dirs) = ProjectDirs::from("", "", "path-entry") {
            let user = dirs.config_dir().join("config.toml");
            if user.is_file() {
                return Ok(Some(user));
            }
            tracing::debug!("No user configuration at {}", user.display());
        }

        Ok(None)
    }

    /// Load the located config file, or defaults when there is none.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit)? {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Build the encoding detector described by this config.
    pub fn encoding_detector(&self) -> Result<EncodingDetector> {
        EncodingDetector::from_labels(self.encoding.sample_size, &self.encoding.candidates)
    }

    pub fn upload_staging(&self) -> Option<UploadStaging> {
        self.upload.staging_dir.clone().map(UploadStaging::new)
    }
}
