//! Resolution of a local checkout's package name.

use crate::composer::manifest::{MANIFEST_FILE_NAME, Manifest};
use crate::error::{Result, SwitchError};
use crate::output::Reporter;
use crate::verify::normalize_target_path;
use std::io::Write;
use std::path::Path;

/// Reads the package name declared by the checkout at `target`.
///
/// `target` is resolved against `base_dir`, the directory holding the root
/// manifest. The name is returned verbatim.
///
/// # Errors
///
/// - `NotADirectory` if the normalized path is not an existing directory
/// - `ManifestMissing` if the directory has no `composer.json`
/// - `InvalidManifest` if that file cannot be read or parsed
/// - `IdentityMissing` if it has no string `name` entry
pub fn resolve_package_name<W: Write>(
    target: &str,
    base_dir: &Path,
    reporter: &mut Reporter<W>,
) -> Result<String> {
    reporter.success(1, format!("Resolving package name for path '{}'...", target));

    let normalized = normalize_target_path(target)?;
    let dir = base_dir.join(&normalized);
    log::debug!("Looking for checkout in {}", dir.display());

    if !dir.is_dir() {
        return Err(SwitchError::NotADirectory(normalized));
    }

    let manifest_path = dir.join(MANIFEST_FILE_NAME);
    if !manifest_path.exists() {
        return Err(SwitchError::ManifestMissing(normalized));
    }

    let manifest = Manifest::load(&manifest_path)?;
    let name = manifest
        .name()
        .ok_or_else(|| SwitchError::IdentityMissing(manifest_path.clone()))?
        .to_string();

    reporter.plain(2, format!("Package name found: '{}'", name));
    Ok(name)
}
