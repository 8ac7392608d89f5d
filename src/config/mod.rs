//! Configuration management
//!
//! Static configuration is loaded once at startup from `config.toml`
//! (or the path given with `-c/--config`) and `APPBOARD__*` environment
//! variables, then shared through a process-wide `OnceLock`.

mod structs;

pub use structs::*;

use std::sync::OnceLock;

static CONFIG: OnceLock<StaticConfig> = OnceLock::new();

/// Load configuration and install it globally.
///
/// Subsequent calls are ignored and return the already-installed config.
pub fn init_config(path: Option<&str>) -> &'static StaticConfig {
    CONFIG.get_or_init(|| StaticConfig::load(path))
}
