//! Serializable snapshot of an entry.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::entry::PathEntry;

/// Every derived value of a [`PathEntry`] at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct EntrySummary {
    pub raw_path: String,
    pub pathname: String,
    pub filename: String,
    pub filename_without_extension: String,
    pub extension: Option<String>,
    pub path: String,
    pub is_url: bool,
    pub resolved: bool,
    pub size: Option<u64>,
    pub modified: Option<DateTime<Local>>,
    pub mime_type: Option<String>,
}

impl From<&PathEntry> for EntrySummary {
    fn from(entry: &PathEntry) -> Self {
        Self {
            raw_path: entry.raw_path().to_string(),
            pathname: entry.pathname().into_owned(),
            filename: entry.filename().to_string(),
            filename_without_extension: entry.filename_without_extension().to_string(),
            extension: entry.extension().map(str::to_string),
            path: entry.path().to_string(),
            is_url: entry.is_url(),
            resolved: entry.is_resolved(),
            size: entry.size(),
            modified: entry.modified(),
            mime_type: entry.mime_type(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_for_url() {
        let entry = PathEntry::new("https://cdn.example.net/img/logo.svg");
        let json = serde_json::to_value(entry.summary()).unwrap();

        assert_eq!(json["filename"], "logo.svg");
        assert_eq!(json["filename_without_extension"], "logo");
        assert_eq!(json["extension"], "svg");
        assert_eq!(json["path"], "https://cdn.example.net/img");
        assert_eq!(json["is_url"], true);
        assert_eq!(json["resolved"], false);
        assert!(json["size"].is_null());
        assert_eq!(json["mime_type"], "image/svg+xml");
    }
}
