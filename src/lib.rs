//! path-entry - path and file metadata helpers.
//!
//! A [`PathEntry`] wraps one path or URL string. When the path exists it
//! captures the file's metadata once; otherwise every query is answered by
//! parsing the string.
//!
//! # Features
//!
//! - Filename, extension, directory, and size for local paths and URLs
//! - Moves and copies that never clobber an existing file unless asked
//! - Slugified renames bounded by a maximum filename length
//! - Whole-file content access and line ending normalization
//! - Best-effort character encoding detection
//!
//! # Example
//!
//! ```no_run
//! use path_entry::PathEntry;
//!
//! fn main() -> path_entry::Result<()> {
//!     let mut entry = PathEntry::new("/tmp/uploads/IMG_0042.JPG");
//!     entry.set_name_slugified("Beach day, 2024", "-", true, Some(64), false)?;
//!     println!("{} ({:?} bytes)", entry.pathname(), entry.size());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod encoding;
pub mod entry;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use config::Config;
pub use encoding::EncodingDetector;
pub use entry::{EntrySummary, FileInfo, PathEntry, Resolution};
pub use error::{Error, Result};
pub use fs::{extension_from_filename, free_path, slugify, UploadStaging};
