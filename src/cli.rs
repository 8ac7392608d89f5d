//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for appboard using clap's derive macros.

use clap::{Parser, Subcommand};

/// Appboard - A terminal dashboard for Parse Server apps
#[derive(Parser)]
#[command(name = "appboard")]
#[command(version)]
#[command(about = "A terminal dashboard for Parse Server apps", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// List registered apps
    List {
        /// Only show apps whose name contains this text
        #[arg(long)]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Probe a Parse Server and register it
    Add {
        /// Server URL, e.g. http://localhost:1337/parse
        #[arg(long)]
        server_url: String,

        /// Application ID
        #[arg(long)]
        app_id: String,

        /// Master key
        #[arg(long)]
        master_key: String,

        /// Display name (default: the application ID)
        #[arg(long)]
        name: Option<String>,
    },

    /// Fetch user and installation counts for every reachable app
    Refresh,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
