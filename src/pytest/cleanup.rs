//! Removal of test run leftovers
//!
//! Pytest, coverage and the Python interpreter leave caches behind. They are
//! removed after every test run: `.pytest_cache` and `__pycache__`
//! directories and `.coverage` data files, anywhere under the base directory.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::cli::Output;

/// Directory names removed wherever they appear
pub const CACHE_DIRS: [&str; 2] = [".pytest_cache", "__pycache__"];

/// File names removed wherever they appear
pub const CACHE_FILES: [&str; 1] = [".coverage"];

/// Removes cache artifacts under `base`, reporting the outcome
///
/// Errors are reported as a warning and stop the cleanup. They never
/// propagate. Returns whether cleanup finished.
pub fn cleanup_test_cache(base: &Path, output: &Output) -> bool {
    match remove_artifacts(base) {
        Ok(removed) => {
            tracing::debug!(removed, base = %base.display(), "test cache cleaned");
            output.info("🧹 Test cache cleaned up");
            true
        }
        Err(e) => {
            output.warn(&format!("⚠️ Warning: Could not clean up test cache: {}", e));
            false
        }
    }
}

/// Walks `base` and removes every artifact, returning how many were removed
fn remove_artifacts(base: &Path) -> io::Result<usize> {
    let entries = match fs::read_dir(base) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if file_type.is_dir() {
            if CACHE_DIRS.contains(&name.as_ref()) {
                ignore_missing(fs::remove_dir_all(&path))?;
                removed += 1;
            } else if name != ".git" {
                removed += remove_artifacts(&path)?;
            }
        } else if CACHE_FILES.contains(&name.as_ref()) {
            ignore_missing(fs::remove_file(&path))?;
            removed += 1;
        }
    }

    Ok(removed)
}

fn ignore_missing(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
