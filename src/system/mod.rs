//! Process-level plumbing shared by the CLI and TUI

pub mod logging;

pub use logging::{LogTarget, init_logging};
