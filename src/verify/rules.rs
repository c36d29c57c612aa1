//! Normalization rules for target paths.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{Result, SwitchError};

/// Separator used in stored repository URLs and lookup keys.
pub const PATH_SEPARATOR: char = '/';

fn is_separator(ch: char) -> bool {
    ch == PATH_SEPARATOR || ch == std::path::MAIN_SEPARATOR
}

/// Normalizes a user-supplied target path.
///
/// ## Rules
/// - Runs of separators collapse into a single `/`
/// - The result always ends with exactly one `/`
/// - Nothing else changes: no `.`/`..` resolution, no case folding
///
/// `../lib`, `../lib/` and `..//lib//` all normalize to `../lib/`.
pub fn normalize_target_path(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(SwitchError::Usage("Target path cannot be empty".to_string()));
    }

    let mut normalized = String::with_capacity(raw.len() + 1);
    for ch in raw.chars().chain(std::iter::once(PATH_SEPARATOR)) {
        if is_separator(ch) {
            if !normalized.ends_with(PATH_SEPARATOR) {
                normalized.push(PATH_SEPARATOR);
            }
        } else {
            normalized.push(ch);
        }
    }

    Ok(normalized)
}
