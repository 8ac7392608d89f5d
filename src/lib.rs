//! Appboard - A terminal dashboard for Parse Server apps
//!
//! Lists registered Parse Server application instances, filters them by
//! name, shows reachability, version and usage counters, and registers new
//! instances after probing their `serverInfo` endpoint.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//! - **cli**: Non-interactive commands (default)
//!
//! # Architecture
//! - `registry`: App descriptors and their JSON store
//! - `transport`: Parse REST requests behind the `ServerApi` trait
//! - `services`: Registration probe, stats refresh, clone progress feed
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Mode detection and startup
//! - `system`: Logging setup

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod registry;
pub mod runtime;
pub mod services;
pub mod system;
pub mod transport;
pub mod utils;
