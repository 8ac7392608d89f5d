//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - app_screens: Main, AddApp, AppDetails, inline filter
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod app_screens;
mod misc_screens;

use app_screens::*;
use misc_screens::*;

/// Handle keyboard input based on current screen; returns true to exit
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    // Handle inline search mode first
    if app.inline_search_mode && app.current_screen == CurrentScreen::Main {
        return handle_inline_search(app, key_code);
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::AddApp => handle_add_app_screen(app, key_code),
        CurrentScreen::AppDetails => handle_app_details_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
