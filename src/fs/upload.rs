//! Upload staging area.
//!
//! Files that arrive through an upload land in a staging directory first.
//! Moving one of them out is a promotion: it is only allowed for files that
//! really live under the staging directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A directory holding freshly uploaded files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStaging {
    dir: PathBuf,
}

impl UploadStaging {
    /// Create a staging handle for `dir`. The directory does not need to exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The staging directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Check whether `path` is a regular file inside the staging directory.
    pub fn is_staged(&self, path: &Path) -> bool {
        let (Ok(dir), Ok(path)) = (self.dir.canonicalize(), path.canonicalize()) else {
            return false;
        };
        path != dir && path.starts_with(&dir) && path.is_file()
    }

    /// Move a staged upload to its final location.
    pub fn promote(&self, from: &Path, to: &Path) -> Result<()> {
        if !self.is_staged(from) {
            return Err(Error::InvalidArgument(format!(
                "{} is not a staged upload in {}",
                from.display(),
                self.dir.display()
            )));
        }

        fs::rename(from, to)?;
        tracing::info!("Promoted upload {} to {}", from.display(), to.display());
        Ok(())
    }
}
