//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use tracing::debug;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::{CliError, run_cli_command};

/// Run CLI mode
///
/// Without a subcommand (TUI not compiled in) the registered apps are listed.
pub async fn run_cli(command: Option<Commands>, config: &StaticConfig) -> Result<(), CliError> {
    let command = command.unwrap_or(Commands::List {
        filter: None,
        json: false,
    });
    debug!("Running CLI command: {:?}", command);
    run_cli_command(command, config).await
}
