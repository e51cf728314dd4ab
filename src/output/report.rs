//! Entry reports.

use console::style;

use crate::entry::EntrySummary;

/// Placeholder for values an entry does not have.
const NONE: &str = "-";

/// Render a human-readable report of an entry summary.
pub fn format_summary(summary: &EntrySummary) -> String {
    let mode = if summary.resolved {
        "resolved"
    } else if summary.is_url {
        "virtual (url)"
    } else {
        "virtual"
    };

    let rows = [
        ("Path", summary.pathname.clone()),
        ("Mode", mode.to_string()),
        ("Filename", summary.filename.clone()),
        ("Stem", summary.filename_without_extension.clone()),
        (
            "Extension",
            summary.extension.clone().unwrap_or_else(|| NONE.to_string()),
        ),
        ("Directory", summary.path.clone()),
        (
            "Size",
            summary
                .size
                .map(|size| format!("{} bytes", size))
                .unwrap_or_else(|| NONE.to_string()),
        ),
        (
            "Modified",
            summary
                .modified
                .map(|modified| modified.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| NONE.to_string()),
        ),
        (
            "MIME type",
            summary.mime_type.clone().unwrap_or_else(|| NONE.to_string()),
        ),
    ];

    rows.iter()
        .map(|(label, value)| format!("  {:<10} {}", format!("{}:", label), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a report of an entry summary.
pub fn print_summary(summary: &EntrySummary) {
    println!("{}", style(&summary.raw_path).bold());
    println!("{}", format_summary(summary));
}
