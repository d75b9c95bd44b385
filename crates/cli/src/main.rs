mod cli;
mod commands;
mod config;
mod formatters;
mod tables;
mod terminal_progress_reporter;

use std::process;

use clap::Parser;
use siteprov::{
    config::{
        YamlLoader,
        loader::{ApplyToConfg, ConfigLoader},
    },
    fs::real::RealFileSystem,
};
use terminal_progress_reporter::TerminalProgressReporter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{cli::ClapCli, commands::dispatch_command};

/// Overrides the `--verbose` log filter when set
const LOG_ENV: &str = "SITEPROV_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ClapCli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!("CLI arguments: {:#?}", &args);

    let fs = RealFileSystem;

    // Use `config` for most things; use `original_config` for `config` commands, where we want to
    // deal strictly with the config file.
    let (config, original_config) = {
        // 1. Load config.yaml
        let config = YamlLoader::new(&fs).load_config()?;

        // 2. Apply CLI args to config (overriding)
        (args.apply_to_config(config.clone()), config)
    };

    debug!("Final config: {:#?}", &config);

    let reporter = TerminalProgressReporter::new(config.use_colors());

    // 3. Dispatch and execute the requested command
    let exit_code = dispatch_command(&args.command, &config, original_config, reporter).await;

    process::exit(exit_code)
}
