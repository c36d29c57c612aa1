//! Pre-flight checks performed before the root manifest is parsed.
//!
//! Unlike `rules`, these functions perform I/O. Each failure maps to its
//! own error so the user knows whether the file is missing, unreadable
//! or read-only.

use crate::error::{Result, SwitchError};
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Checks that the root manifest exists, can be read and can be written.
///
/// # Checks Performed
///
/// 1. The path exists
/// 2. The path is a file that opens for reading
/// 3. The file is not read-only and opens for writing
///
/// Opening for writing does not truncate; the file is left untouched.
pub fn check_manifest_access(manifest_path: &Path) -> Result<()> {
    if !manifest_path.exists() {
        return Err(SwitchError::ManifestFileMissing(manifest_path.to_path_buf()));
    }

    if manifest_path.is_dir() {
        log::debug!("{} is a directory", manifest_path.display());
        return Err(SwitchError::ManifestFileUnreadable(
            manifest_path.to_path_buf(),
        ));
    }

    if let Err(e) = File::open(manifest_path) {
        log::debug!("Cannot open {} for reading: {}", manifest_path.display(), e);
        return Err(SwitchError::ManifestFileUnreadable(
            manifest_path.to_path_buf(),
        ));
    }

    let readonly = fs::metadata(manifest_path)
        .map(|m| m.permissions().readonly())
        .unwrap_or(false);
    if readonly {
        log::debug!("{} is marked read-only", manifest_path.display());
        return Err(SwitchError::ManifestFileUnwritable(
            manifest_path.to_path_buf(),
        ));
    }

    if let Err(e) = OpenOptions::new().write(true).open(manifest_path) {
        log::debug!("Cannot open {} for writing: {}", manifest_path.display(), e);
        return Err(SwitchError::ManifestFileUnwritable(
            manifest_path.to_path_buf(),
        ));
    }

    log::debug!("Manifest access verified: {}", manifest_path.display());
    Ok(())
}
