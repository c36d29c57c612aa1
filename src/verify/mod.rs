//! Validation for switch operations.

pub mod preflight;
pub mod rules;

pub use preflight::check_manifest_access;
pub use rules::{PATH_SEPARATOR, normalize_target_path};
