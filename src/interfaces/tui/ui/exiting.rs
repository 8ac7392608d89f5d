use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

/// Lines of the quit dialog; warns when a stats refresh would be cut short
pub fn exit_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Close the Appboard dashboard?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            format!("{} registered apps are saved in the registry.", app.apps.len()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if app.refreshing {
        lines.push(Line::from(Span::styled(
            "A stats refresh is still running and will be dropped.",
            Style::default().fg(Color::Yellow),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[y]", Style::default().fg(Color::Green).bold()),
        Span::raw(" quit   "),
        Span::styled("[n/Esc]", Style::default().fg(Color::Red).bold()),
        Span::raw(" back to apps"),
    ]));
    lines
}

pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Quit", popup::EXITING)
        .theme_color(Color::Magenta)
        .padding(2, 1)
        .render(frame, area);

    let paragraph = Paragraph::new(exit_lines(app))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner_area);
}
