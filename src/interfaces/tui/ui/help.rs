use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn shortcut(keys: &'static str, description: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("NAVIGATION"),
        shortcut("Up/Down, j/k", "Navigate app list", Color::Cyan),
        shortcut("Home, g", "Jump to top", Color::Cyan),
        shortcut("End, G", "Jump to bottom", Color::Cyan),
        shortcut("PageUp/PageDown", "Scroll 5 apps", Color::Cyan),
        Line::from(""),
        section("ACTIONS"),
        shortcut("a", "Add a new app", Color::Green),
        shortcut("Enter, v", "Open app details", Color::Cyan),
        shortcut("r", "Refresh user and installation counts", Color::Yellow),
        shortcut("y", "Copy server URL", Color::Magenta),
        shortcut("Y", "Copy application ID", Color::Magenta),
        Line::from(""),
        section("FILTER"),
        shortcut("/", "Filter apps by name", Color::Cyan),
        shortcut("Enter", "Keep filter and return to list", Color::Green),
        shortcut("Esc", "Clear filter", Color::Red),
        Line::from(""),
        section("ADD APP FORM"),
        shortcut("Tab / Shift+Tab", "Next / previous field", Color::Cyan),
        shortcut("Enter", "Probe server and add app", Color::Green),
        shortcut("Esc", "Cancel", Color::Red),
        Line::from(""),
        section("GENERAL"),
        shortcut("?, h", "Show this help", Color::Blue),
        shortcut("q", "Quit", Color::Magenta),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
