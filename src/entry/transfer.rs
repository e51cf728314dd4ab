//! Moving, copying, and renaming entries.
//!
//! Without the overwrite flag the destination goes through
//! [`free_path`] first. The existence check and the move or copy are two
//! separate calls, so a file created in between by someone else can still
//! be overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::{PathEntry, Resolution};
use crate::error::{Error, Result};
use crate::fs::{free_path, slugify, truncate_chars};

/// Separator used for collision suffixes on move and copy.
pub const DEFAULT_SEPARATOR: &str = "-";

fn destination(target: &str, overwrite_if_exists: bool) -> String {
    if overwrite_if_exists {
        target.to_string()
    } else {
        free_path(target, DEFAULT_SEPARATOR)
    }
}

fn with_extension(stem: &str, extension: Option<&str>) -> String {
    match extension {
        Some(extension) => format!("{}.{}", stem, extension),
        None => stem.to_string(),
    }
}

/// Both paths exist and resolve to the same file.
fn same_file(source: &Path, target: &Path) -> bool {
    match (source.canonicalize(), target.canonicalize()) {
        (Ok(source), Ok(target)) => source == target,
        _ => false,
    }
}

fn filename_len(path: &Path) -> usize {
    path.file_name()
        .map(|name| name.to_string_lossy().chars().count())
        .unwrap_or(0)
}

impl PathEntry {
    /// Move the file to `target`.
    ///
    /// Returns `Ok(false)` and leaves the entry untouched when the move
    /// fails. Staged uploads are promoted through their staging area.
    pub fn move_to(&mut self, target: &str, overwrite_if_exists: bool) -> Result<bool> {
        if target.is_empty() {
            return Err(Error::InvalidArgument(
                "Cannot move: target path is empty".to_string(),
            ));
        }

        let target = destination(target, overwrite_if_exists);
        let source = self.fs_path().to_path_buf();

        let outcome = match &self.staging {
            Some(staging) if staging.is_staged(&source) => {
                staging.promote(&source, Path::new(&target))
            }
            _ => fs::rename(&source, &target).map_err(Error::from),
        };

        match outcome {
            Ok(()) => {
                tracing::info!("Moved {} to {}", source.display(), target);
                self.resolution = Resolution::for_location(&target);
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("Failed to move {} to {}: {}", source.display(), target, e);
                Ok(false)
            }
        }
    }

    /// Copy the file to `target` and return an entry for the copy.
    pub fn copy_to(&self, target: &str, overwrite_if_exists: bool) -> Option<PathEntry> {
        let target = destination(target, overwrite_if_exists);

        // Copying a file onto itself truncates it
        if same_file(self.fs_path(), Path::new(&target)) {
            tracing::warn!(
                "Refusing to copy {} onto itself",
                self.fs_path().display()
            );
            return None;
        }

        match fs::copy(self.fs_path(), &target) {
            Ok(bytes) => {
                tracing::info!(
                    "Copied {} to {} ({} bytes)",
                    self.fs_path().display(),
                    target,
                    bytes
                );
                let copy = PathEntry::new(target);
                Some(match &self.staging {
                    Some(staging) => copy.with_upload_staging(staging.clone()),
                    None => copy,
                })
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to copy {} to {}: {}",
                    self.fs_path().display(),
                    target,
                    e
                );
                None
            }
        }
    }

    /// Rename the file to a slug of `new_name`, keeping its extension.
    ///
    /// `max_length` bounds the final filename, extension and any collision
    /// suffix included. A failed move is logged and the entry is returned
    /// unchanged.
    pub fn set_name_slugified(
        &mut self,
        new_name: &str,
        separator: &str,
        lowercase: bool,
        max_length: Option<usize>,
        overwrite_if_exists: bool,
    ) -> Result<&mut Self> {
        let slug = slugify(new_name, separator, lowercase);
        if slug.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "'{}' has no characters usable in a filename",
                new_name
            )));
        }

        let extension = self.extension().map(str::to_string);
        let reserved = extension.as_ref().map_or(0, |ext| ext.chars().count() + 1);
        let parent = PathBuf::from(self.path());

        let mut budget = match max_length {
            Some(max) if max <= reserved => {
                return Err(Error::InvalidArgument(format!(
                    "Maximum length {} leaves no room for a name",
                    max
                )));
            }
            Some(max) => Some(max - reserved),
            None => None,
        };

        let target = loop {
            let stem = budget.map_or(slug.as_str(), |budget| truncate_chars(&slug, budget));
            let candidate = parent.join(with_extension(stem, extension.as_deref()));
            if overwrite_if_exists {
                break candidate;
            }

            let free = PathBuf::from(free_path(&candidate.to_string_lossy(), separator));
            let (Some(max), Some(current)) = (max_length, budget) else {
                break free;
            };

            let len = filename_len(&free);
            if len <= max {
                break free;
            }

            // The collision suffix pushed the name over the limit
            let excess = len - max;
            if excess >= current {
                return Err(Error::InvalidArgument(format!(
                    "No free name for '{}' fits in {} characters",
                    slug, max
                )));
            }
            budget = Some(current - excess);
        };

        let target = target.to_string_lossy().into_owned();
        tracing::debug!("Slugified name for {}: {}", self.filename(), target);
        self.move_to(&target, overwrite_if_exists)?;
        Ok(self)
    }
}
