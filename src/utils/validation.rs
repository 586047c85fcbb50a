//! Path and input validation utilities.
//!
//! This module provides common validation functions to ensure consistent
//! error handling across the commands.

use crate::constants::AUDIO_EXTENSIONS;
use std::error::Error;
use std::path::Path;

/// Validate that a path exists and return an error if it doesn't.
///
/// # Arguments
///
/// * `path` - The path to validate
///
/// # Returns
///
/// * `Ok(())` if the path exists
/// * `Err` naming the missing path; `main` adds the `Error:` prefix
pub fn validate_path_exists(path: &Path) -> Result<(), Box<dyn Error>> {
    if !path.exists() {
        return Err(format!("Path does not exist: {}", path.display()).into());
    }
    Ok(())
}

/// Validate that `path` is an existing file with a supported audio extension.
///
/// The extension check is case-insensitive, so `take.WAV` is accepted.
pub fn validate_audio_file(path: &Path) -> Result<(), Box<dyn Error>> {
    validate_path_exists(path)?;

    if !path.is_file() {
        return Err(format!("Not a file: {}", path.display()).into());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some(ext) if AUDIO_EXTENSIONS.contains(&ext) => Ok(()),
        _ => Err(format!("Unsupported audio format: {} (expected .wav)", path.display()).into()),
    }
}
