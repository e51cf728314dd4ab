//! Filename generation and manipulation.

use std::path::{Path, MAIN_SEPARATOR};

use regex::Regex;

/// Turn a human-readable name into a filename-safe slug.
///
/// Unicode is transliterated to ASCII, every run of characters outside
/// `[A-Za-z0-9]` collapses into a single `separator`, and leading or
/// trailing separators are dropped.
pub fn slugify(text: &str, separator: &str, lowercase: bool) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push_str(separator);
            }
            pending_separator = false;
            slug.push(if lowercase { c.to_ascii_lowercase() } else { c });
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Get the extension of a filename: everything after the last `.`.
pub fn extension_from_filename(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|dot| &filename[dot + 1..])
}

/// Split a path into the part before the extension and the extension itself.
///
/// Only the final component is searched for a `.`, so dotted directory
/// names are left intact.
pub fn split_extension(path: &str) -> (&str, Option<&str>) {
    let start = last_separator(path).map_or(0, |pos| pos + 1);
    match path[start..].rfind('.') {
        Some(dot) => (&path[..start + dot], Some(&path[start + dot + 1..])),
        None => (path, None),
    }
}

/// Return a path that does not exist yet, derived from `path`.
///
/// An existing `name.ext` becomes `name<sep>1.ext`; an existing
/// `name<sep>N.ext` becomes `name<sep>N+1.ext`, until a free path is found.
///
/// The check is not atomic: another process may create the returned path
/// before the caller uses it.
pub fn free_path(path: &str, separator: &str) -> String {
    let suffix_pattern = Regex::new(&format!(r"(?s)^(.*){}(\d+)$", regex::escape(separator)))
        .expect("escaped separator always forms a valid pattern");

    let mut candidate = path.to_string();
    while Path::new(&candidate).exists() {
        let (stem, extension) = split_extension(&candidate);

        let next_stem = suffix_pattern
            .captures(stem)
            .and_then(|captures| {
                let counter: u64 = captures[2].parse().ok()?;
                Some(format!(
                    "{}{}{}",
                    &captures[1],
                    separator,
                    counter.checked_add(1)?
                ))
            })
            .unwrap_or_else(|| format!("{}{}1", stem, separator));

        let next = match extension {
            Some(extension) => format!("{}.{}", next_stem, extension),
            None => next_stem,
        };

        tracing::debug!("Path {} is taken, trying {}", candidate, next);
        candidate = next;
    }

    candidate
}

/// Keep at most `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(byte_pos, _)| &text[..byte_pos])
}

/// Byte position of the last `/` or platform separator.
pub(crate) fn last_separator(path: &str) -> Option<usize> {
    let slash = path.rfind('/');
    let platform = path.rfind(MAIN_SEPARATOR);
    slash.max(platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World", "-", true), "hello-world");
        assert_eq!(slugify("  Rapport  Final!! ", "_", false), "Rapport_Final");
        assert_eq!(slugify("Été à Paris", "-", true), "ete-a-paris");
        assert_eq!(slugify("a--b..c", "-", true), "a-b-c");
        assert_eq!(slugify("***", "-", true), "");
    }

    #[test]
    fn test_slugify_names_with_path_characters() {
        assert_eq!(slugify("AC/DC Live", "-", true), "ac-dc-live");
        assert_eq!(slugify("v1..v2", "-", true), "v1-v2");
        assert_eq!(slugify("Q3: Sales?", "_", false), "Q3_Sales");
    }

    #[test]
    fn test_extension_from_filename() {
        assert_eq!(extension_from_filename("report.final.csv"), Some("csv"));
        assert_eq!(extension_from_filename("archive.tar.gz"), Some("gz"));
        assert_eq!(extension_from_filename("README"), None);
        assert_eq!(extension_from_filename("trailing."), Some(""));
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("/tmp/a.txt"), ("/tmp/a", Some("txt")));
        assert_eq!(split_extension("/tmp/dir.d/file"), ("/tmp/dir.d/file", None));
        assert_eq!(split_extension("a.b.c"), ("a.b", Some("c")));
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("éèà", 2), "éè");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_free_path_non_existing_is_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nothing-here.txt");
        let path = path.to_str().unwrap();
        assert_eq!(free_path(path, "-"), path);
    }

    #[test]
    fn test_free_path_first_collision() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.txt"));

        let wanted = dir.path().join("a.txt");
        let expected = dir.path().join("a-1.txt");
        assert_eq!(
            free_path(wanted.to_str().unwrap(), "-"),
            expected.to_str().unwrap()
        );
    }

    #[test]
    fn test_free_path_skips_existing_sequence() {
        let dir = tempdir().unwrap();
        for name in ["a.txt", "a-1.txt", "a-2.txt"] {
            touch(&dir.path().join(name));
        }

        let wanted = dir.path().join("a.txt");
        let expected = dir.path().join("a-3.txt");
        assert_eq!(
            free_path(wanted.to_str().unwrap(), "-"),
            expected.to_str().unwrap()
        );
    }

    #[test]
    fn test_free_path_increments_existing_counter() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("scan_7.pdf"));

        let wanted = dir.path().join("scan_7.pdf");
        let expected = dir.path().join("scan_8.pdf");
        assert_eq!(
            free_path(wanted.to_str().unwrap(), "_"),
            expected.to_str().unwrap()
        );
    }

    #[test]
    fn test_free_path_without_extension() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("Makefile"));

        let wanted = dir.path().join("Makefile");
        let expected = dir.path().join("Makefile-1");
        assert_eq!(
            free_path(wanted.to_str().unwrap(), "-"),
            expected.to_str().unwrap()
        );
    }

    #[test]
    fn test_free_path_huge_counter_falls_back_to_new_suffix() {
        let dir = tempdir().unwrap();
        let name = "a-99999999999999999999999.txt";
        touch(&dir.path().join(name));

        let wanted = dir.path().join(name);
        let expected = dir.path().join("a-99999999999999999999999-1.txt");
        assert_eq!(
            free_path(wanted.to_str().unwrap(), "-"),
            expected.to_str().unwrap()
        );
    }
}
