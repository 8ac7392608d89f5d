// UI submodules
mod add_app;
mod app_details;
mod common;
mod empty_state;
mod exiting;
mod help;
mod inline_search;
mod main_screen;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

// Re-export screen drawing functions
pub use add_app::draw_add_app_screen;
pub use app_details::draw_app_details_screen;
pub use empty_state::draw_empty_state;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use inline_search::draw_inline_search_bar;
pub use main_screen::draw_main_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    // 注册表为空时不显示搜索栏
    let show_search = app.inline_search_mode && !app.apps.is_empty();

    let main_chunks = if show_search {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Inline search bar
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(10),   // Main content
                Constraint::Length(3), // Status
                Constraint::Length(2), // Footer
            ])
            .split(frame.area())
    };

    draw_title_bar(frame, app, main_chunks[0]);

    // The list stays visible behind every popup
    if app.apps.is_empty() {
        draw_empty_state(frame, main_chunks[1]);
    } else {
        draw_main_screen(frame, app, main_chunks[1]);
    }

    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::AddApp => draw_add_app_screen(frame, app, main_chunks[1]),
        CurrentScreen::AppDetails => draw_app_details_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, main_chunks[1]),
    }

    if show_search {
        draw_inline_search_bar(frame, app, main_chunks[2]);
        draw_status_bar(frame, app, main_chunks[3]);
        draw_footer(frame, app, main_chunks[4]);
    } else {
        draw_status_bar(frame, app, main_chunks[2]);
        draw_footer(frame, app, main_chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::registry::{AppCredentials, AppDescriptor, AppRegistry, ServerInfo};
    use crate::services::CloneProgressHub;
    use crate::transport::ParseHttpApi;

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with(registry: AppRegistry) -> App {
        App::new(
            Arc::new(registry),
            Arc::new(ParseHttpApi::new(Duration::from_secs(1), "serverInfo", None)),
            Arc::new(CloneProgressHub::new()),
            "http://localhost:1337/parse",
        )
    }

    #[test]
    fn test_empty_registry_shows_call_to_action() {
        let mut app = app_with(AppRegistry::in_memory());
        let screen = render(&mut app);

        assert!(screen.contains("You don't have any apps"));
        assert!(!screen.contains("Apps ("));
    }

    #[test]
    fn test_cards_render_for_registered_apps() {
        let registry = AppRegistry::in_memory();
        registry
            .add(AppDescriptor::new(
                "Shop",
                AppCredentials::new("http://localhost:1337/parse", "X", "K"),
                ServerInfo::unreachable("unable to connect to server"),
            ))
            .unwrap();
        let mut app = app_with(registry);
        let screen = render(&mut app);

        assert!(!screen.contains("You don't have any apps"));
        assert!(screen.contains("Apps (1)"));
        assert!(screen.contains("Server not reachable: unable to connect to server"));
        assert!(screen.contains("DEVELOPMENT"));
    }

    #[test]
    fn test_filter_without_matches() {
        let registry = AppRegistry::in_memory();
        registry
            .add(AppDescriptor::new(
                "Shop",
                AppCredentials::new("http://localhost:1337/parse", "X", "K"),
                ServerInfo::unreachable("unable to connect to server"),
            ))
            .unwrap();
        let mut app = app_with(registry);
        app.search_input = "zzz".to_string();
        let screen = render(&mut app);

        assert!(screen.contains("No apps match your search"));
    }

    #[test]
    fn test_quit_dialog_mentions_running_refresh() {
        let mut app = app_with(AppRegistry::in_memory());
        app.current_screen = CurrentScreen::Exiting;
        let screen = render(&mut app);
        assert!(screen.contains("Close the Appboard dashboard?"));
        assert!(!screen.contains("will be dropped"));

        app.refreshing = true;
        let screen = render(&mut app);
        assert!(screen.contains("will be dropped"));
    }
}
