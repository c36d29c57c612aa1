//! Registration of local path repositories.

use crate::composer::manifest::{Manifest, REPOSITORIES_KEY, Slot, SourceDescriptor};
use crate::error::Result;
use crate::output::Reporter;
use crate::verify::normalize_target_path;
use std::io::Write;

/// Ensures `repositories` holds a path source for `target`.
///
/// Matching is exact string equality on the normalized path. A new
/// descriptor goes to the front of the list so Composer prefers it over
/// every source registered before it. A `repositories` value that is not
/// a list is discarded and replaced.
///
/// Returns `true` if a descriptor was added.
pub fn register_path_repository<W: Write>(
    manifest: &mut Manifest,
    target: &str,
    reporter: &mut Reporter<W>,
) -> Result<bool> {
    let url = normalize_target_path(target)?;
    reporter.success(1, format!("Registering repository for path '{}'...", url));

    let (slot, repositories) = manifest.ensure_repositories();
    match slot {
        Slot::Present => {}
        Slot::Created => reporter.plain(
            2,
            format!("Missing '{}' entry in composer.json. Creating...", REPOSITORIES_KEY),
        ),
        Slot::Replaced => reporter.plain(
            2,
            format!("'{}' entry is invalid in composer.json. Fixing...", REPOSITORIES_KEY),
        ),
    }

    log::debug!("Scanning {} repository entries", repositories.len());
    if repositories
        .iter()
        .any(|entry| SourceDescriptor::matches_path(entry, &url))
    {
        reporter.plain(2, "Repository already exists. Skipping...");
        return Ok(false);
    }

    reporter.plain(2, "Repository not found. Adding...");
    let descriptor =
        serde_json::to_value(SourceDescriptor::path(url)).map_err(anyhow::Error::from)?;
    repositories.insert(0, descriptor);

    Ok(true)
}
