//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (non-interactive commands)
//! - TUI mode (Terminal UI)
//!
//! The mode selection is based on the parsed subcommand and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run based on the parsed subcommand
///
/// # Mode Detection Logic
/// 1. No subcommand or `tui`, with the TUI feature enabled -> TUI mode
/// 2. Any other subcommand (or no TUI feature) with the CLI feature -> CLI mode
/// 3. Otherwise -> Unknown (no interface compiled in)
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    #[cfg(not(feature = "tui"))]
    let _ = command;

    #[cfg(feature = "tui")]
    if matches!(command, None | Some(Commands::Tui)) {
        return Mode::Tui;
    }

    #[cfg(feature = "cli")]
    return Mode::Cli;

    #[cfg(not(feature = "cli"))]
    Mode::Unknown
}
