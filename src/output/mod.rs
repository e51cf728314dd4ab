//! Output module for console output.
//!
//! Provides:
//! - Colored console messages
//! - Entry reports

pub mod console;
pub mod report;

pub use self::console::{print_error, print_success, print_warning};
pub use report::{format_summary, print_summary};
