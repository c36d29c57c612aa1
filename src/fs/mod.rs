//! File system operations with transaction support.
//!
//! Provides a staged file write that is committed atomically.

pub mod transaction;

pub use transaction::{Operation, Transaction};
