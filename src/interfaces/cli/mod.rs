//! CLI interface module
//!
//! Non-interactive access to the same registry and probe the TUI uses.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::registry::AppRegistry;
use crate::transport::{ParseHttpApi, ServerApi};
use commands::{add_app, config_generate, list_apps, refresh_stats};

#[derive(Debug)]
pub enum CliError {
    RegistryError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::RegistryError(msg) => format!("Registry error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::RegistryError(msg) => {
                format!("{} {}", "Registry error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::AppboardError> for CliError {
    fn from(err: crate::errors::AppboardError) -> Self {
        CliError::RegistryError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Generate doesn't need the registry
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force).await;
    }

    let registry = AppRegistry::open(&config.registry.path)?;
    let api: Arc<dyn ServerApi> = Arc::new(ParseHttpApi::from_config(config));

    match cmd {
        Commands::List { filter, json } => list_apps(&registry, filter.as_deref(), json),
        Commands::Add {
            server_url,
            app_id,
            master_key,
            name,
        } => add_app(api.as_ref(), &registry, server_url, app_id, master_key, name).await,
        Commands::Refresh => refresh_stats(api.as_ref(), &registry).await,
        _ => Err(CliError::CommandError(
            "Command is not available in CLI mode".to_string(),
        )),
    }
}
