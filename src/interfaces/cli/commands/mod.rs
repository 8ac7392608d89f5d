//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod add;
mod config_gen;
mod list;
mod refresh;

pub use add::add_app;
pub use config_gen::config_generate;
pub use list::{format_app_line, list_apps};
pub use refresh::refresh_stats;
