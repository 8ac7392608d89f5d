use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Draw title bar with version and statistics
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let reachable = app.apps.iter().filter(|a| a.is_reachable()).count();

    let mut spans = vec![
        Span::styled("Appboard", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Apps: {} ", app.apps.len()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Reachable: {} ", reachable),
            Style::default().fg(Color::Green),
        ),
    ];
    if app.refreshing {
        spans.push(Span::styled(
            "| Refreshing stats...",
            Style::default().fg(Color::Magenta),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[INFO] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Main if app.inline_search_mode => vec![
            ("Enter", "Keep Filter", Color::Green),
            ("Esc", "Clear", Color::Red),
        ],
        CurrentScreen::Main if app.apps.is_empty() => vec![
            ("a", "Add App", Color::Green),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Main => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("/", "Filter", Color::Cyan),
            ("Enter", "Details", Color::Cyan),
            ("a", "Add", Color::Green),
            ("r", "Refresh", Color::Yellow),
            ("y/Y", "Copy", Color::Magenta),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::AddApp if app.form.is_submitting() => {
            vec![("...", "Probing server", Color::Yellow)]
        }
        CurrentScreen::AddApp => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Add", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
        CurrentScreen::Help | CurrentScreen::AppDetails => vec![("q/Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
