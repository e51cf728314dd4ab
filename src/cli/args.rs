//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Path and file metadata tool.
#[derive(Parser, Debug)]
#[command(
    name = "path-entry",
    version,
    about = "Inspect, move, copy, and rename files without clobbering existing ones",
    long_about = "Derive filename, extension, directory, and size from paths or URLs.\n\n\
                  Moves, copies, and renames pick a free name instead of overwriting, \
                  unless --overwrite is given."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "PATH_ENTRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show derived metadata for a path or URL.
    Info {
        path: String,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print a path that does not exist yet.
    FreePath {
        path: String,
        /// Separator placed before the counter.
        #[arg(short, long)]
        separator: Option<String>,
    },

    /// Move a file.
    Move {
        source: String,
        target: String,
        /// Replace an existing target instead of picking a free name.
        #[arg(long)]
        overwrite: bool,
    },

    /// Copy a file.
    Copy {
        source: String,
        target: String,
        /// Replace an existing target instead of picking a free name.
        #[arg(long)]
        overwrite: bool,
    },

    /// Rename a file to a slug of NAME, keeping its extension.
    Rename {
        path: String,
        name: String,
        #[command(flatten)]
        naming: NamingArgs,
        /// Maximum filename length, extension included.
        #[arg(long)]
        max_length: Option<usize>,
        /// Replace an existing file instead of picking a free name.
        #[arg(long)]
        overwrite: bool,
    },

    /// Rewrite every line ending as CRLF.
    NormalizeEol { path: String },

    /// Guess the character encoding of a file.
    Encoding {
        path: String,
        /// Number of leading bytes to sample.
        #[arg(long)]
        sample_size: Option<usize>,
    },

    /// Print the slug of some text.
    Slug {
        text: String,
        #[command(flatten)]
        naming: NamingArgs,
    },
}

/// Slug options shared by `rename` and `slug`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct NamingArgs {
    /// Separator replacing unsafe characters.
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Keep the original letter case.
    #[arg(long)]
    pub keep_case: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        match &self.command {
            Command::FreePath {
                separator: Some(separator),
                ..
            } => {
                config.naming.separator = separator.clone();
            }
            Command::Rename {
                naming,
                max_length,
                overwrite,
                ..
            } => {
                naming.merge_into_config(config);
                if let Some(max_length) = max_length {
                    config.naming.max_length = Some(*max_length);
                }
                if *overwrite {
                    config.naming.overwrite = true;
                }
            }
            Command::Slug { naming, .. } => naming.merge_into_config(config),
            Command::Encoding {
                sample_size: Some(sample_size),
                ..
            } => {
                config.encoding.sample_size = *sample_size;
            }
            _ => {}
        }
    }
}

impl NamingArgs {
    fn merge_into_config(&self, config: &mut Config) {
        if let Some(separator) = &self.separator {
            config.naming.separator = separator.clone();
        }

        // Boolean flags only override when set
        if self.keep_case {
            config.naming.lowercase = false;
        }
    }
}
