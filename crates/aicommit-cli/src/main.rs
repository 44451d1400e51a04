//! aicommit CLI
//!
//! Entry point for reading and editing the aicommit configuration.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;

use aicommit_config::{ConfigResolver, RawConfig};
use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, ConfigAction};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}

fn report(e: &CliError) {
    if e.is_expected() {
        eprintln!("{}: {}", "error".red().bold(), e);
    } else {
        tracing::error!(error = ?e, "Unexpected failure");
        eprintln!("{}: {}", "unexpected error".red().bold(), e);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Config { action }) => {
            let overrides = commands::collect_overrides(cli.overrides)?;
            cmd_config(action, &overrides)
        }
        None => {
            println!("{} Write commit messages with an LLM", "aicommit".green().bold());
            println!();
            println!("Run {} to set up your API keys.", "aicommit config".cyan());
            Ok(())
        }
    }
}

fn cmd_config(action: Option<ConfigAction>, overrides: &RawConfig) -> Result<()> {
    let resolver = ConfigResolver::new()?;
    let mut stdout = std::io::stdout().lock();

    match action {
        None => interactive::run_interactive(&resolver),
        Some(ConfigAction::Get { keys }) => {
            commands::run_config_get(&resolver, &keys, overrides, &mut stdout)
        }
        Some(ConfigAction::Set { entries }) => commands::run_config_set(&resolver, &entries),
        Some(ConfigAction::Unset { keys }) => commands::run_config_unset(&resolver, &keys),
        Some(ConfigAction::Show { json }) => {
            commands::run_config_show(&resolver, overrides, json, &mut stdout)
        }
        Some(ConfigAction::Path) => commands::run_config_path(&resolver, &mut stdout),
    }
}
