//! Event handlers for app-related screens
//!
//! Handles: Main, AddApp, AppDetails, inline filter

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CopyTarget, CurrentScreen, FormMessage};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Esc => {
            if app.is_searching() {
                app.search_input.clear();
                app.clamp_selection();
            }
        }
        KeyCode::Char('/') => {
            // 空注册表时不显示搜索栏
            if !app.apps.is_empty() {
                app.inline_search_mode = true;
                app.search_input.clear();
                app.clamp_selection();
            }
        }
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => app.open_selected_details(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_form(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if app.refreshing {
                app.set_status("Stats refresh already running".to_string());
            } else {
                app.request_refresh();
                app.set_status("Refreshing stats...".to_string());
            }
        }
        KeyCode::Char('y') => app.copy_selected(CopyTarget::ServerUrl),
        KeyCode::Char('Y') => app.copy_selected(CopyTarget::ApplicationId),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    Ok(false)
}

/// Handle add app screen input
pub fn handle_add_app_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Enter => app.submit_registration(),
        KeyCode::Esc => {
            if !app.cancel_add_form() {
                app.set_status("Waiting for the server to answer...".to_string());
            }
        }
        KeyCode::Tab => app.form.update(FormMessage::NextField),
        KeyCode::BackTab => app.form.update(FormMessage::PrevField),
        KeyCode::Backspace => app.form.update(FormMessage::PopChar),
        KeyCode::Char(c) => app.form.update(FormMessage::PushChar(c)),
        _ => {}
    }
    Ok(false)
}

/// Handle app details screen input
pub fn handle_app_details_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => app.close_details(),
        KeyCode::Char('y') => app.copy_selected(CopyTarget::ServerUrl),
        KeyCode::Char('Y') => app.copy_selected(CopyTarget::ApplicationId),
        _ => {}
    }
    Ok(false)
}

/// Handle inline search mode input
pub fn handle_inline_search(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc => {
            app.inline_search_mode = false;
            app.search_input.clear();
        }
        KeyCode::Enter => {
            // Keep the filter applied
            app.inline_search_mode = false;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
    app.clamp_selection();
    Ok(false)
}
