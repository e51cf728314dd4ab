//! Reading, writing, and inspecting file content.

use std::fs;

use encoding_rs::Encoding;

use crate::encoding::EncodingDetector;
use crate::entry::PathEntry;
use crate::error::{Error, Result};

/// Replace every `\r` and every `\n` with `\r\n` in a single pass.
///
/// An existing `\r\n` pair is two line-ending characters and therefore
/// becomes `\r\n\r\n`. Works on raw bytes so content in any
/// ASCII-compatible encoding passes through untouched.
pub fn normalize_line_endings(content: &[u8]) -> Vec<u8> {
    let mut normalized = Vec::with_capacity(content.len() + content.len() / 8);
    for &byte in content {
        match byte {
            b'\r' | b'\n' => normalized.extend_from_slice(b"\r\n"),
            byte => normalized.push(byte),
        }
    }
    normalized
}

impl PathEntry {
    /// Full content as text, or `None` if the file cannot be read as UTF-8.
    pub fn get_content(&self) -> Option<String> {
        match fs::read_to_string(self.fs_path()) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", self.fs_path().display(), e);
                None
            }
        }
    }

    /// Full content as bytes, or `None` if the file cannot be read.
    pub fn get_bytes(&self) -> Option<Vec<u8>> {
        match fs::read(self.fs_path()) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", self.fs_path().display(), e);
                None
            }
        }
    }

    /// Replace the whole content of the file.
    pub fn set_content(&self, content: &str) -> Result<()> {
        fs::write(self.fs_path(), content)?;
        tracing::info!(
            "Wrote {} bytes to {}",
            content.len(),
            self.fs_path().display()
        );
        Ok(())
    }

    /// Rewrite the file with `\r\n` line endings, see [`normalize_line_endings`].
    pub fn normalize_end_lines(&self) -> Result<()> {
        let content = self
            .get_bytes()
            .ok_or_else(|| Error::Unreadable(self.fs_path().to_path_buf()))?;

        let normalized = normalize_line_endings(&content);
        fs::write(self.fs_path(), &normalized)?;
        tracing::info!(
            "Normalized line endings in {} ({} bytes)",
            self.fs_path().display(),
            normalized.len()
        );
        Ok(())
    }

    /// Guess the content encoding with the default detector.
    pub fn detect_encoding(&self) -> Option<&'static str> {
        self.detect_encoding_with(&EncodingDetector::default())
    }

    /// Guess the content encoding with `detector`; `None` if unknown.
    pub fn detect_encoding_with(&self, detector: &EncodingDetector) -> Option<&'static str> {
        detector.detect_file(self.fs_path()).map(Encoding::name)
    }
}
