/// File handling utilities
///
/// This module provides the small filesystem helpers the census relies on:
/// extension checks, byte sizes, and whole-file text reads.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Check whether a path carries the given extension (without the dot).
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(extension)
}

/// Byte size of a file on disk.
pub fn file_size(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Read the full text contents of a file.
///
/// The contents are assumed to decode as UTF-8; a binary file surfaces the
/// underlying read error.
pub fn read_file_content(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
