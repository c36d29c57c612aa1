//! Orchestration logic for switching packages to local checkouts.
//!
//! The root manifest is loaded once, edited in memory for every target in
//! command-line order, and written once through a `Transaction`. Any error
//! stops the run before the write, and the write itself replaces the file
//! atomically, so the file on disk is either fully updated or untouched.

use crate::cli::SwitchArgs;
use crate::composer::{
    Manifest, RequireSection, register_path_repository, require_dev_version,
    resolve_package_name,
};
use crate::error::{Result, SwitchError};
use crate::fs::Transaction;
use crate::output::Reporter;
use crate::verify::{check_manifest_access, normalize_target_path};

use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything a run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct SwitchConfig {
    /// Root manifest to edit.
    pub manifest_path: PathBuf,
    /// Target paths, processed in order.
    pub paths: Vec<String>,
    pub dry_run: bool,
}

impl From<SwitchArgs> for SwitchConfig {
    fn from(args: SwitchArgs) -> Self {
        Self {
            manifest_path: args.manifest_path,
            paths: args.paths,
            dry_run: args.dry_run,
        }
    }
}

impl SwitchConfig {
    /// Directory target paths are resolved against.
    fn base_dir(&self) -> &Path {
        self.manifest_path.parent().unwrap_or(Path::new(""))
    }
}

/// A package pointed at its local checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchedPackage {
    pub name: String,
    pub url: String,
    pub section: RequireSection,
    pub repository_added: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchOutcome {
    pub packages: Vec<SwitchedPackage>,
    /// False for dry runs and when the manifest was already up to date.
    pub written: bool,
}

/// Executes a switch run.
///
/// ## Phases
///
/// 1. Check the root manifest exists, is readable and writable
/// 2. Load it
/// 3. For each target: resolve name, register repository, set `@dev`
/// 4. Stage the serialized manifest and commit
///
/// The final "Done." line is only printed once the write succeeded.
pub fn execute<W: Write>(
    config: &SwitchConfig,
    reporter: &mut Reporter<W>,
) -> Result<SwitchOutcome> {
    if config.paths.is_empty() {
        return Err(SwitchError::Usage(
            "Expected at least one argument. 0 given.".to_string(),
        ));
    }

    check_manifest_access(&config.manifest_path)?;
    let mut manifest = Manifest::load(&config.manifest_path)?;
    let base_dir = config.base_dir();

    let mut packages = Vec::with_capacity(config.paths.len());
    for target in &config.paths {
        packages.push(switch_target(&mut manifest, target, base_dir, reporter)?);
    }

    let content = manifest.to_pretty_string()?;
    let mut txn = Transaction::new(config.dry_run);
    txn.update_file(config.manifest_path.clone(), content)?;

    if txn.is_empty() {
        reporter.plain(0, "composer.json is already up to date.");
    }

    if config.dry_run {
        print_preview(&txn, reporter);
        reporter.success(0, "Dry run: composer.json not written.");
        return Ok(SwitchOutcome {
            packages,
            written: false,
        });
    }

    let written = !txn.is_empty();
    if let Err(e) = txn.commit() {
        reporter.error(0, "No changes were written to composer.json.");
        return Err(e);
    }

    if written {
        log::info!(
            "Wrote {} ({} package(s))",
            config.manifest_path.display(),
            packages.len()
        );
    }
    reporter.success(0, "Done.");

    Ok(SwitchOutcome { packages, written })
}

fn switch_target<W: Write>(
    manifest: &mut Manifest,
    target: &str,
    base_dir: &Path,
    reporter: &mut Reporter<W>,
) -> Result<SwitchedPackage> {
    reporter.success(0, format!("Processing path '{}'...", target));

    match switch_steps(manifest, target, base_dir, reporter) {
        Ok(package) => {
            reporter.success(0, "");
            Ok(package)
        }
        Err(e) => {
            reporter.error(2, &e);
            Err(e)
        }
    }
}

fn switch_steps<W: Write>(
    manifest: &mut Manifest,
    target: &str,
    base_dir: &Path,
    reporter: &mut Reporter<W>,
) -> Result<SwitchedPackage> {
    let name = resolve_package_name(target, base_dir, reporter)?;
    let repository_added = register_path_repository(manifest, target, reporter)?;
    let section = require_dev_version(manifest, &name, reporter);

    Ok(SwitchedPackage {
        name,
        url: normalize_target_path(target)?,
        section,
        repository_added,
    })
}

fn print_preview<W: Write>(txn: &Transaction, reporter: &mut Reporter<W>) {
    if let Some(op) = txn.staged() {
        reporter.plain(0, format!("Would write {}:", op.path.display()));
        for line in op.new.lines() {
            reporter.plain(1, line);
        }
    }
}
