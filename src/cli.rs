use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

use crate::composer::MANIFEST_FILE_NAME;

/// Switch Composer dependencies to local checkouts.
///
/// For every PATH, reads the package name from PATH/composer.json, registers
/// PATH as a `path` repository and sets the package's constraint to `@dev`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "composer-dev-switch",
    version,
    after_help = "Example:\n  composer-dev-switch ../relative/path/to/repository"
)]
pub struct SwitchArgs {
    /// Relative paths to local package checkouts
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Path to the composer.json to edit
    #[arg(long, value_name = "PATH", default_value = MANIFEST_FILE_NAME)]
    pub manifest_path: PathBuf,

    /// Show what would change without writing composer.json
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl SwitchArgs {
    /// Log filter implied by `--verbose`.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// One-line usage plus an example invocation.
pub fn usage() -> String {
    format!(
        "{}\n       composer-dev-switch ../relative/path/to/repository",
        SwitchArgs::command().render_usage()
    )
}
