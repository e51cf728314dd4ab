//! Path entries: one path or URL string plus optional on-disk metadata.
//!
//! An entry built for a path that exists resolves its metadata once and
//! answers every query from that snapshot. An entry for anything else
//! (missing files, URLs) is virtual and answers by parsing the string.

pub mod content;
pub mod info;
pub mod parse;
pub mod summary;
pub mod transfer;

use std::borrow::Cow;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::fs::UploadStaging;

pub use content::normalize_line_endings;
pub use info::FileInfo;
pub use summary::EntrySummary;

/// Where an entry's metadata comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Metadata captured from the filesystem.
    Resolved(FileInfo),
    /// No entity on disk; the string is parsed instead.
    Virtual(String),
}

impl Resolution {
    /// Resolve `location` if something exists there, otherwise stay virtual.
    pub fn for_location(location: &str) -> Self {
        let path = Path::new(location);
        if !path.exists() {
            tracing::debug!("{} does not exist, using virtual metadata", location);
            return Resolution::Virtual(location.to_string());
        }

        match FileInfo::resolve(path) {
            Ok(info) => Resolution::Resolved(info),
            Err(e) => {
                tracing::debug!("Cannot resolve {}: {}", location, e);
                Resolution::Virtual(location.to_string())
            }
        }
    }
}

/// A file or URL-like path with derived metadata.
#[derive(Debug, Clone)]
pub struct PathEntry {
    raw_path: String,
    resolution: Resolution,
    staging: Option<UploadStaging>,
}

impl PathEntry {
    /// Create an entry for `path`. Never fails; missing paths become virtual.
    pub fn new(path: impl Into<String>) -> Self {
        let raw_path = path.into();
        let resolution = Resolution::for_location(&raw_path);
        Self {
            raw_path,
            resolution,
            staging: None,
        }
    }

    /// Treat files under `staging` as uploads when moving them.
    pub fn with_upload_staging(mut self, staging: UploadStaging) -> Self {
        self.staging = Some(staging);
        self
    }

    pub fn upload_staging(&self) -> Option<&UploadStaging> {
        self.staging.as_ref()
    }

    /// The path exactly as given at construction.
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved(_))
    }

    /// The path used for filesystem calls.
    pub(crate) fn fs_path(&self) -> &Path {
        match &self.resolution {
            Resolution::Resolved(info) => &info.canonical,
            Resolution::Virtual(location) => Path::new(location),
        }
    }

    /// Canonical path when resolved, the parsed location otherwise.
    pub fn pathname(&self) -> Cow<'_, str> {
        match &self.resolution {
            Resolution::Resolved(info) => info.canonical.to_string_lossy(),
            Resolution::Virtual(location) => Cow::Borrowed(location),
        }
    }

    pub fn filename(&self) -> &str {
        match &self.resolution {
            Resolution::Resolved(info) => &info.filename,
            Resolution::Virtual(location) => parse::filename(location),
        }
    }

    pub fn extension(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::Resolved(info) => info.extension.as_deref(),
            Resolution::Virtual(location) => parse::extension(location),
        }
    }

    /// The filename without its trailing `.<extension>`.
    pub fn filename_without_extension(&self) -> &str {
        let filename = self.filename();
        match self.extension() {
            Some(extension) => filename
                .strip_suffix(extension)
                .and_then(|rest| rest.strip_suffix('.'))
                .unwrap_or(filename),
            None => filename,
        }
    }

    /// Parent directory.
    pub fn path(&self) -> &str {
        match &self.resolution {
            Resolution::Resolved(info) => &info.parent,
            Resolution::Virtual(location) => parse::parent(location),
        }
    }

    /// Size in bytes captured at resolution time.
    ///
    /// `None` for virtual entries and for anything that is not a regular file.
    pub fn size(&self) -> Option<u64> {
        match &self.resolution {
            Resolution::Resolved(info) => info.size,
            Resolution::Virtual(_) => None,
        }
    }

    pub fn modified(&self) -> Option<DateTime<Local>> {
        match &self.resolution {
            Resolution::Resolved(info) => info.modified,
            Resolution::Virtual(_) => None,
        }
    }

    /// MIME type guessed from the extension.
    pub fn mime_type(&self) -> Option<String> {
        self.extension()
            .and_then(|extension| mime_guess::from_ext(extension).first())
            .map(|mime| mime.to_string())
    }

    /// Whether the raw path is a URL with a host.
    pub fn is_url(&self) -> bool {
        parse::is_url(&self.raw_path)
    }

    /// Snapshot of every derived value.
    pub fn summary(&self) -> EntrySummary {
        EntrySummary::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::MAIN_SEPARATOR;
    use tempfile::tempdir;

    #[test]
    fn test_virtual_local_path() {
        let raw = format!("{0}no{0}such{0}dir{0}report.final.csv", MAIN_SEPARATOR);
        let entry = PathEntry::new(raw.clone());

        assert!(!entry.is_resolved());
        assert!(!entry.is_url());
        assert_eq!(entry.raw_path(), raw);
        assert_eq!(entry.pathname(), raw);
        assert_eq!(entry.filename(), "report.final.csv");
        assert_eq!(entry.extension(), Some("csv"));
        assert_eq!(entry.filename_without_extension(), "report.final");
        assert_eq!(entry.path(), format!("{0}no{0}such{0}dir", MAIN_SEPARATOR));
        assert_eq!(entry.size(), None);
        assert_eq!(entry.modified(), None);
        assert_eq!(entry.mime_type().as_deref(), Some("text/csv"));
    }

    #[test]
    fn test_virtual_url() {
        let entry = PathEntry::new("https://example.com/media/photo.jpg");

        assert!(entry.is_url());
        assert!(!entry.is_resolved());
        assert_eq!(entry.filename(), "photo.jpg");
        assert_eq!(entry.filename_without_extension(), "photo");
        assert_eq!(entry.extension(), Some("jpg"));
        assert_eq!(entry.path(), "https://example.com/media");
        assert_eq!(entry.mime_type().as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_virtual_without_extension() {
        let entry = PathEntry::new("Makefile");
        assert_eq!(entry.extension(), None);
        assert_eq!(entry.filename(), "Makefile");
        assert_eq!(entry.filename_without_extension(), "Makefile");
        assert_eq!(entry.path(), "");
        assert_eq!(entry.mime_type(), None);
    }

    #[test]
    fn test_virtual_extension_from_dotted_directory() {
        // The extension is taken from the whole string, so a dotted directory
        // leaks into it while the filename stays intact.
        let raw = format!("{0}srv{0}site.d{0}README", MAIN_SEPARATOR);
        let entry = PathEntry::new(raw);
        assert_eq!(entry.extension(), Some(format!("d{}README", MAIN_SEPARATOR).as_str()));
        assert_eq!(entry.filename_without_extension(), "README");
    }

    #[test]
    fn test_resolved_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let entry = PathEntry::new(path.to_str().unwrap());
        let canonical_dir = dir.path().canonicalize().unwrap();

        assert!(entry.is_resolved());
        assert!(!entry.is_url());
        assert_eq!(entry.filename(), "notes.txt");
        assert_eq!(entry.filename_without_extension(), "notes");
        assert_eq!(entry.extension(), Some("txt"));
        assert_eq!(entry.path(), canonical_dir.to_string_lossy());
        assert_eq!(
            entry.pathname(),
            canonical_dir.join("notes.txt").to_string_lossy()
        );
        assert_eq!(entry.size(), Some(5));
        assert!(entry.modified().is_some());
    }

    #[test]
    fn test_metadata_is_captured_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("grow.log");
        fs::write(&path, "a").unwrap();

        let entry = PathEntry::new(path.to_str().unwrap());
        fs::write(&path, "abcdef").unwrap();

        assert_eq!(entry.size(), Some(1));
    }

    #[test]
    fn test_directory_has_no_size() {
        let dir = tempdir().unwrap();
        let entry = PathEntry::new(dir.path().to_str().unwrap());
        assert!(entry.is_resolved());
        assert_eq!(entry.size(), None);
    }
}
