//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use anyhow::Result;
use tracing::info;

use crate::config::StaticConfig;

/// Run TUI mode
pub async fn run_tui(config: &StaticConfig) -> Result<()> {
    info!("Starting TUI with registry {}", config.registry.path);
    crate::interfaces::tui::run_tui(config)
        .await
        .map_err(|e| anyhow::anyhow!("TUI exited with error: {}", e))
}
