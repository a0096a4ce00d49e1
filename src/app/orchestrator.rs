//! Main application orchestrator.
//!
//! Coordinates one command-line invocation:
//! 1. Initializes logging unless quiet.
//! 2. Dispatches on the subcommand.
//! 3. For multi-level commands, processes each level in turn, flushing the
//!    verbose log after each one. A level that fails to load is reported and
//!    skipped; the command fails at the end if any level was skipped.
//! 4. Prints results to stdout and a closing message.

use std::path::{Path, PathBuf};

use super::cli::{Cli, Command};
use super::error::AppError;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::PointId;
use crate::path::ReplayError;

/// Runs the application logic for the parsed command line.
///
/// # Errors
/// Returns `AppError` when a level cannot be loaded, when `info` or `replay`
/// hit a malformed level, or when a replayed route does not solve the level.
/// A level rejected during `count` is a result, not an error.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going without the log file.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = match &cli.command {
        Command::Connect { level_files } => run_connect(level_files, quiet_mode),
        Command::Count { level_files } => run_count(level_files, quiet_mode),
        Command::Info { level_file } => run_info(level_file, quiet_mode),
        Command::Replay { level_file, route } => run_replay(level_file, route, quiet_mode),
    };

    flush_log(quiet_mode, "final");
    if result.is_ok() && !quiet_mode {
        println!(
            "\nSee '{}' for verbose output.",
            cli.log_file.display()
        );
    }
    result
}

fn run_connect(level_files: &[PathBuf], quiet_mode: bool) -> Result<(), AppError> {
    let mut failed = 0;
    for level_file in level_files {
        match processing::load_level(level_file, quiet_mode) {
            Ok((level_name, graph)) => {
                let connected = processing::process_connectivity(&graph, quiet_mode);
                println!(
                    "{}: {}",
                    level_name,
                    if connected { "connected" } else { "not connected" }
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}: {}", level_file.display(), e);
            }
        }
        flush_log(quiet_mode, "per-level");
    }
    summarize_failures(failed, level_files.len(), quiet_mode)
}

fn run_count(level_files: &[PathBuf], quiet_mode: bool) -> Result<(), AppError> {
    let mut failed = 0;
    for level_file in level_files {
        match processing::load_level(level_file, quiet_mode) {
            Ok((level_name, graph)) => match processing::process_count(&graph, quiet_mode) {
                Ok(count) => println!("{}: {} solution(s)", level_name, count),
                Err(e) => println!("{}: rejected [{}] {}", level_name, e.code(), e),
            },
            Err(e) => {
                failed += 1;
                eprintln!("{}: {}", level_file.display(), e);
            }
        }
        flush_log(quiet_mode, "per-level");
    }
    summarize_failures(failed, level_files.len(), quiet_mode)
}

fn run_info(level_file: &Path, quiet_mode: bool) -> Result<(), AppError> {
    let (level_name, graph) = processing::load_level(level_file, quiet_mode)?;
    print!("{}", processing::describe_level(&level_name, &graph));
    Ok(())
}

fn run_replay(level_file: &Path, route: &[PointId], quiet_mode: bool) -> Result<(), AppError> {
    let (level_name, graph) = processing::load_level(level_file, quiet_mode)?;
    let session = match processing::process_replay(&graph, route, quiet_mode) {
        Ok(session) => session,
        Err(ReplayError::Check(e)) => return Err(AppError::Check(e)),
        Err(e) => return Err(AppError::Replay(e)),
    };

    if session.is_finished() {
        println!(
            "{}: route solves the level (final energy {})",
            level_name,
            session.energy()
        );
        Ok(())
    } else {
        Err(AppError::General(format!(
            "route is incomplete: {} visit(s) left after {:?}",
            session.remaining_steps(),
            session.route()
        )))
    }
}

fn summarize_failures(failed: usize, total: usize, quiet_mode: bool) -> Result<(), AppError> {
    if failed == 0 {
        verbose_println!(quiet_mode, "\nAll {} level(s) processed.", total);
        return Ok(());
    }
    verbose_eprintln!(quiet_mode, "{} of {} level(s) could not be loaded.", failed, total);
    Err(AppError::General(format!(
        "{} of {} level file(s) could not be loaded",
        failed, total
    )))
}

fn flush_log(quiet_mode: bool, stage: &str) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        // Log to stderr as the log file itself might be the one failing.
        eprintln!("[WARNING] Failed to perform {} flush of the log: {}", stage, e);
    }
}
