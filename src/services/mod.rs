//! Business logic shared by the CLI and TUI

pub mod probe;
pub mod progress;
pub mod stats;

pub use probe::{RegistrationCandidate, classify, probe, register_app};
pub use progress::CloneProgressHub;
pub use stats::{AppStats, fetch_stats, refresh_all};
