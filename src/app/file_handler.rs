//! File system checks for level files passed on the command line.
//!
//! Uses the verbose logging macros from the parent `app` module to record why
//! a path was rejected.

use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Validates a level file path and derives a display name from it.
///
/// Checks that the path exists and points to a file. The name is the file
/// stem, falling back to the full path when there is none.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing or not a file.
pub fn validate_level_file(level_file_path: &Path, quiet_mode: bool) -> Result<String, AppError> {
    if !level_file_path.exists() {
        let error_msg = format!("File not found: {}", level_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !level_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", level_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }

    let level_name = level_file_path
        .file_stem()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| level_file_path.display().to_string());

    Ok(level_name)
}
