//! TUI application state and operations

mod app_operations;
mod navigation;
mod state;

pub use app_operations::CopyTarget;
pub use state::{App, CurrentScreen, EditingField, FormMessage, SubmissionState};
