//! Metadata captured for a path that exists on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::fs::extension_from_filename;

/// Snapshot of a filesystem entity, taken once at resolution time.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    /// Canonical absolute path.
    pub canonical: PathBuf,

    /// Final component of the canonical path.
    pub filename: String,

    /// Text after the last `.` of the filename.
    pub extension: Option<String>,

    /// Parent directory of the canonical path.
    pub parent: String,

    /// Size in bytes, only for regular files.
    pub size: Option<u64>,

    /// Last modification time, when the platform reports one.
    pub modified: Option<DateTime<Local>>,
}

impl FileInfo {
    /// Resolve metadata for an existing path.
    pub fn resolve(path: &Path) -> io::Result<Self> {
        let canonical = path.canonicalize()?;
        let metadata = fs::metadata(&canonical)?;

        let filename = canonical
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = extension_from_filename(&filename).map(str::to_string);
        let parent = canonical
            .parent()
            .map(|parent| parent.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            size: metadata.is_file().then(|| metadata.len()),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
            canonical,
            filename,
            extension,
            parent,
        })
    }
}
