//! Staged manifest write, committed atomically.
//!
//! Nothing touches the disk until `commit()`. The new content goes to a
//! temporary file in the same directory, which then replaces the target
//! with a single rename. A failure at any point leaves the target as it was.
//!
//! ## Example
//!
//! ```no_run
//! # use composer_dev_switch::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> composer_dev_switch::error::Result<()> {
//! let mut txn = Transaction::new(false);
//!
//! txn.update_file(PathBuf::from("composer.json"), "{}\n".into())?;
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, SwitchError};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A staged file update.
#[derive(Debug, Clone)]
pub struct Operation {
    pub path: PathBuf,
    pub new: String,
}

/// Holds at most one staged write.
///
/// ## Dry-Run Mode
///
/// When `dry_run = true`, the write is staged but never committed to disk.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    staged: Option<Operation>,
    dry_run: bool,
}

impl Transaction {
    pub fn new(dry_run: bool) -> Self {
        Self {
            staged: None,
            dry_run,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_none()
    }

    pub fn staged(&self) -> Option<&Operation> {
        self.staged.as_ref()
    }

    /// Stages a file update.
    ///
    /// Reads current content and compares to `new_content`. If identical,
    /// nothing is staged. A later call replaces the earlier one.
    pub fn update_file(&mut self, path: PathBuf, new_content: String) -> Result<()> {
        let original = fs::read_to_string(&path).map_err(|e| {
            log::error!("Failed to read {}: {}", path.display(), e);
            SwitchError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        if original == new_content {
            log::debug!("Content unchanged, skipping: {}", path.display());
            self.staged = None;
            return Ok(());
        }

        if self.dry_run {
            log::info!("Would update: {}", path.display());
        } else {
            log::debug!("Staging update for: {}", path.display());
        }

        self.staged = Some(Operation {
            path,
            new: new_content,
        });
        Ok(())
    }

    /// Writes the staged update, if any.
    ///
    /// The target keeps its permissions. On error the target is unchanged.
    pub fn commit(self) -> Result<()> {
        let Transaction { staged, dry_run } = self;
        let op = match staged {
            Some(op) if !dry_run => op,
            _ => return Ok(()),
        };

        write_atomic(&op.path, &op.new).map_err(|source| SwitchError::WriteFailure {
            path: op.path.clone(),
            source,
        })?;

        log::debug!("Updated: {}", op.path.display());
        Ok(())
    }
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let permissions = fs::metadata(path)?.permissions();
    if permissions.readonly() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "file is read-only",
        ));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    fs::set_permissions(tmp.path(), permissions)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
