#![doc = include_str!("../README.md")]

pub mod cli;
pub mod composer;
pub mod error;
pub mod fs;
pub mod output;
pub mod steps;
pub mod verify;

pub use error::*;

/// Runs a switch with progress written to stdout.
pub fn run(args: cli::SwitchArgs) -> Result<steps::SwitchOutcome> {
    let config = steps::SwitchConfig::from(args);
    let mut reporter = output::Reporter::new(std::io::stdout().lock());
    steps::execute(&config, &mut reporter)
}
