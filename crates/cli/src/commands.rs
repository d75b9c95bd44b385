pub(crate) mod config;
pub(crate) mod fields;
pub(crate) mod site;

use siteprov::config::AppConfig;
use tracing::debug;

use crate::{
    cli::{ClapCommands, ConfigSubcommands},
    terminal_progress_reporter::TerminalProgressReporter,
};

/// Primary command dispatcher that routes to the appropriate command handler
pub async fn dispatch_command(
    command: &ClapCommands,
    config: &AppConfig,
    original_config: AppConfig,
    reporter: TerminalProgressReporter,
) -> i32 {
    debug!("Dispatching command: {:?}", command);

    match command {
        ClapCommands::New(args) => site::handle_new(args, config, reporter).await,
        ClapCommands::Fields { site_type } => fields::handle_fields(site_type, reporter),
        ClapCommands::Config(config_cmd) => {
            dispatch_config_command(&config_cmd.command, &original_config, reporter)
        }
    }
}

/// Handle configuration management commands
fn dispatch_config_command(
    command: &ConfigSubcommands,
    original_config: &AppConfig,
    reporter: TerminalProgressReporter,
) -> i32 {
    debug!("Handling config command: {:?}", command);

    match command {
        ConfigSubcommands::Validate => config::handle_validate(original_config, reporter),
    }
}
