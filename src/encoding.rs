//! Character encoding detection over a leading byte sample.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Bytes read from the start of a file when guessing its encoding.
pub const DEFAULT_SAMPLE_SIZE: usize = 4096;

/// Encodings accepted as a detection result unless configured otherwise.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "UTF-8",
    "UTF-16LE",
    "UTF-16BE",
    "windows-1252",
    "ISO-8859-2",
    "ISO-8859-15",
    "windows-1250",
    "windows-1251",
    "KOI8-R",
    "Shift_JIS",
    "EUC-JP",
    "ISO-2022-JP",
    "GBK",
    "gb18030",
    "Big5",
    "EUC-KR",
];

/// Best-effort encoding guesser restricted to a candidate list.
#[derive(Debug, Clone)]
pub struct EncodingDetector {
    sample_size: usize,
    candidates: Vec<&'static Encoding>,
}

impl Default for EncodingDetector {
    fn default() -> Self {
        Self::from_labels(DEFAULT_SAMPLE_SIZE, DEFAULT_CANDIDATES)
            .expect("default candidate labels are known to encoding_rs")
    }
}

impl EncodingDetector {
    pub fn new(sample_size: usize, candidates: Vec<&'static Encoding>) -> Self {
        Self {
            sample_size,
            candidates,
        }
    }

    /// Build a detector from encoding labels such as `"UTF-8"` or `"latin1"`.
    pub fn from_labels<S: AsRef<str>>(sample_size: usize, labels: &[S]) -> Result<Self> {
        let candidates = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                Encoding::for_label(label.as_bytes()).ok_or_else(|| Error::ConfigValidation {
                    field: "encoding.candidates".to_string(),
                    message: format!("Unknown encoding label: '{}'", label),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(sample_size, candidates))
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn candidates(&self) -> &[&'static Encoding] {
        &self.candidates
    }

    /// Guess the encoding of `sample`.
    ///
    /// A byte order mark wins, then valid UTF-8, then a statistical guess.
    /// Returns `None` for an empty sample or a guess outside the candidates.
    pub fn detect(&self, sample: &[u8]) -> Option<&'static Encoding> {
        if sample.is_empty() {
            return None;
        }

        let guess = if let Some((encoding, _bom_len)) = Encoding::for_bom(sample) {
            encoding
        } else if is_utf8_prefix(sample) {
            encoding_rs::UTF_8
        } else {
            let mut detector = chardetng::EncodingDetector::new();
            detector.feed(sample, true);
            detector.guess(None, true)
        };

        if self.candidates.contains(&guess) {
            Some(guess)
        } else {
            tracing::debug!("Guessed encoding {} is not a candidate", guess.name());
            None
        }
    }

    /// Read a leading sample of `path` and guess its encoding.
    pub fn detect_file(&self, path: &Path) -> Option<&'static Encoding> {
        match read_sample(path, self.sample_size) {
            Ok(sample) => self.detect(&sample),
            Err(e) => {
                tracing::debug!("Cannot sample {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Valid UTF-8, allowing a multi-byte sequence cut off at the end of the sample.
fn is_utf8_prefix(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

fn read_sample(path: &Path, sample_size: usize) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(sample_size);
    file.take(sample_size as u64).read_to_end(&mut sample)?;
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const FRENCH: &str = "Le rapport de l'été dernier a été déposé à la préfecture. \
        Les élèves ont présenté leurs idées très créatives pendant la fête de fin d'année, \
        et le maître a félicité chacun d'entre eux pour la qualité du travail réalisé.";

    #[test]
    fn test_detect_utf8() {
        let detector = EncodingDetector::default();
        assert_eq!(detector.detect(FRENCH.as_bytes()), Some(encoding_rs::UTF_8));
        assert_eq!(detector.detect(b"plain ascii"), Some(encoding_rs::UTF_8));
    }

    #[test]
    fn test_detect_truncated_utf8_sample() {
        let detector = EncodingDetector::default();
        let bytes = "déjà".as_bytes();
        // Cut in the middle of the two-byte 'à'
        let sample = &bytes[..bytes.len() - 1];
        assert_eq!(detector.detect(sample), Some(encoding_rs::UTF_8));
    }

    #[test]
    fn test_detect_bom() {
        let detector = EncodingDetector::default();
        let sample = [0xFF, 0xFE, b'h', 0x00, b'i', 0x00];
        assert_eq!(detector.detect(&sample), Some(encoding_rs::UTF_16LE));
    }

    #[test]
    fn test_detect_legacy_single_byte() {
        let detector = EncodingDetector::default();
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(FRENCH);
        assert_ne!(detector.detect(&bytes), Some(encoding_rs::UTF_8));
    }

    #[test]
    fn test_detect_outside_candidates() {
        let detector = EncodingDetector::from_labels(DEFAULT_SAMPLE_SIZE, &["UTF-8"]).unwrap();
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(FRENCH);
        assert_eq!(detector.detect(&bytes), None);
    }

    #[test]
    fn test_detect_empty() {
        assert_eq!(EncodingDetector::default().detect(b""), None);
    }

    #[test]
    fn test_from_labels_rejects_unknown() {
        let result = EncodingDetector::from_labels(16, &["UTF-8", "klingon"]);
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_detect_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, FRENCH).unwrap();

        let detector = EncodingDetector::default();
        assert_eq!(detector.detect_file(&path), Some(encoding_rs::UTF_8));
        assert_eq!(detector.detect_file(&dir.path().join("missing.txt")), None);
    }
}
