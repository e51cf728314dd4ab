//! path-entry - CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use path_entry::{
    cli::{Args, Command},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::{free_path, slugify},
    output::{print_error, print_success, print_summary, print_warning},
    PathEntry,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::InvalidArgument(_) => ExitCode::from(exit_codes::INVALID_ARGUMENT as u8),
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Io(_) | Error::Unreadable(_) => ExitCode::from(exit_codes::IO_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Load configuration, then let CLI flags override it
    let mut config = Config::load_or_default(args.config.as_deref())?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    tracing::debug!("Effective configuration: {:?}", config);

    match args.command {
        Command::Info { path, json } => {
            let summary = open_entry(&config, path).summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }
        Command::FreePath { path, .. } => {
            println!("{}", free_path(&path, &config.naming.separator));
        }
        Command::Move {
            source,
            target,
            overwrite,
        } => {
            let mut entry = open_existing(&config, source)?;
            if !entry.move_to(&target, overwrite)? {
                return Err(failed("move", &entry, &target));
            }
            print_success(&format!("Moved to {}", entry.pathname()));
        }
        Command::Copy {
            source,
            target,
            overwrite,
        } => {
            let entry = open_existing(&config, source)?;
            let copy = entry
                .copy_to(&target, overwrite)
                .ok_or_else(|| failed("copy", &entry, &target))?;
            print_success(&format!("Copied to {}", copy.pathname()));
        }
        Command::Rename { path, name, .. } => {
            let mut entry = open_existing(&config, path)?;
            let before = entry.pathname().into_owned();

            entry.set_name_slugified(
                &name,
                &config.naming.separator,
                config.naming.lowercase,
                config.naming.max_length,
                config.naming.overwrite,
            )?;

            if entry.pathname() == before {
                print_warning(&format!("{} was not renamed", before));
            } else {
                print_success(&format!("Renamed to {}", entry.pathname()));
            }
        }
        Command::NormalizeEol { path } => {
            let entry = open_existing(&config, path)?;
            entry.normalize_end_lines()?;
            print_success(&format!("Normalized line endings in {}", entry.pathname()));
        }
        Command::Encoding { path, .. } => {
            let detector = config.encoding_detector()?;
            let entry = open_existing(&config, path)?;
            println!(
                "{}",
                entry.detect_encoding_with(&detector).unwrap_or("unknown")
            );
        }
        Command::Slug { text, .. } => {
            println!(
                "{}",
                slugify(&text, &config.naming.separator, config.naming.lowercase)
            );
        }
    }

    Ok(())
}

/// Build an entry, attaching the configured upload staging area.
fn open_entry(config: &Config, path: String) -> PathEntry {
    let entry = PathEntry::new(path);
    match config.upload_staging() {
        Some(staging) => entry.with_upload_staging(staging),
        None => entry,
    }
}

/// Build an entry for a path that must exist.
fn open_existing(config: &Config, path: String) -> Result<PathEntry> {
    let entry = open_entry(config, path);
    if !entry.is_resolved() {
        return Err(Error::InvalidArgument(format!(
            "{} does not exist",
            entry.raw_path()
        )));
    }
    Ok(entry)
}

fn failed(operation: &str, entry: &PathEntry, target: &str) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::Other,
        format!("Failed to {} {} to {}", operation, entry.pathname(), target),
    ))
}
