//! Filesystem module.
//!
//! Provides:
//! - Filename generation and manipulation
//! - Free (non-colliding) path search
//! - Upload staging

pub mod naming;
pub mod upload;

pub use naming::{extension_from_filename, free_path, slugify, split_extension, truncate_chars};
pub use upload::UploadStaging;
