//! Utility functions for error handling
//!
//! This module provides file helpers that turn I/O failures into configuration
//! errors carrying the path and the reason the file was needed.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Error, Result};

/// Safely read an artifact file to string with rich error information
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
///
/// # Returns
/// * `Result<String>` - The file content or a configuration error naming the path
pub fn read_artifact(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "File not found: {} (needed for: {purpose})",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(Error::configuration(format!(
            "Path is not a file: {} (expected a file for: {purpose})",
            path.display()
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        let reason = match e.kind() {
            io::ErrorKind::PermissionDenied => "Permission denied - check file permissions",
            io::ErrorKind::NotFound => "File not found - it may have been deleted during startup",
            io::ErrorKind::InvalidData => "File contains invalid UTF-8 data - cannot read as text",
            _ => "Failed to read file",
        };
        Error::configuration(format!(
            "{reason}: {} (needed for: {purpose}): {e}",
            path.display()
        ))
    })
}

/// Read an artifact that may legitimately be absent
///
/// Returns `Ok(None)` when nothing exists at `path`; any other failure is
/// reported like [`read_artifact`].
pub fn read_optional_artifact(path: &Path, purpose: &str) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    read_artifact(path, purpose).map(Some)
}
