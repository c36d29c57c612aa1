//! High-level operations driven by the command line.

pub mod switch;

pub use switch::{SwitchConfig, SwitchOutcome, SwitchedPackage, execute};
