//! String parsing for paths that do not exist on disk.
//!
//! URLs split on `/`; everything else splits on the platform separator.

use std::path::MAIN_SEPARATOR;

use url::Url;

use crate::fs::extension_from_filename;

/// Check whether `raw` is an absolute URL with a non-empty host.
pub fn is_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

fn separator_for(location: &str) -> char {
    if is_url(location) {
        '/'
    } else {
        MAIN_SEPARATOR
    }
}

/// Text after the last separator, or the whole string.
pub fn filename(location: &str) -> &str {
    match location.rfind(separator_for(location)) {
        Some(pos) => &location[pos + 1..],
        None => location,
    }
}

/// Text before the last separator, or an empty string.
pub fn parent(location: &str) -> &str {
    match location.rfind(separator_for(location)) {
        Some(pos) => &location[..pos],
        None => "",
    }
}

/// Text after the last `.` anywhere in the location.
pub fn extension(location: &str) -> Option<&str> {
    extension_from_filename(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/file.txt"));
        assert!(is_url("ftp://files.example.org/pub/a.zip"));
        assert!(!is_url("/var/data/file.txt"));
        assert!(!is_url("C:\\data\\file.txt"));
        assert!(!is_url("file:///tmp/file.txt"));
        assert!(!is_url("example.com/file.txt"));
        assert!(!is_url(""));
    }

    #[test]
    fn test_url_parts() {
        let url = "https://example.com/docs/report.final.csv";
        assert_eq!(filename(url), "report.final.csv");
        assert_eq!(parent(url), "https://example.com/docs");
        assert_eq!(extension(url), Some("csv"));
    }

    #[test]
    fn test_local_parts() {
        let local = format!("data{0}reports{0}summary.txt", MAIN_SEPARATOR);
        assert_eq!(filename(&local), "summary.txt");
        assert_eq!(parent(&local), format!("data{}reports", MAIN_SEPARATOR));
        assert_eq!(extension(&local), Some("txt"));
    }

    #[test]
    fn test_bare_name() {
        assert_eq!(filename("notes.md"), "notes.md");
        assert_eq!(parent("notes.md"), "");
        assert_eq!(extension("LICENSE"), None);
    }
}
