//! Binary entry point for `composer-dev-switch`.

use clap::Parser;
use colored::Colorize;
use composer_dev_switch::cli::{SwitchArgs, usage};
use composer_dev_switch::SwitchError;
use composer_dev_switch::steps::SwitchOutcome;
use std::process;

fn main() {
    let args = match SwitchArgs::try_parse() {
        Ok(args) => args,
        // --help and --version print to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => fail(&SwitchError::Usage(clap_message(&e))),
    };

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match composer_dev_switch::run(args) {
        Ok(outcome) => log_outcome(&outcome),
        Err(e) => fail(&e),
    }
}

fn log_outcome(outcome: &SwitchOutcome) {
    for package in &outcome.packages {
        log::info!(
            "{} -> {} in '{}' (repository {})",
            package.name,
            package.url,
            package.section.key(),
            if package.repository_added { "added" } else { "kept" }
        );
    }
    if !outcome.written {
        log::info!("composer.json left unchanged");
    }
}

fn fail(e: &SwitchError) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), e);
    eprintln!();
    eprintln!("{}", usage());
    process::exit(1);
}

/// First line of a clap error without its `error:` prefix.
fn clap_message(e: &clap::Error) -> String {
    if e.kind() == clap::error::ErrorKind::MissingRequiredArgument {
        return "Expected at least one argument. 0 given.".to_string();
    }

    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error:").trim().to_string()
}
