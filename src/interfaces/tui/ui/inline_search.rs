//! Inline search bar component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;

/// Draw the inline search bar
pub fn draw_inline_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let search_text = vec![Line::from(vec![
        Span::styled(
            "/",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.search_input.as_str(), Style::default().fg(Color::White)),
        Span::styled(
            "_",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::RAPID_BLINK),
        ),
    ])];

    let matches = app.display_count();
    let result_count = if !app.is_searching() {
        String::new()
    } else if matches == 0 {
        " (no matches)".to_string()
    } else {
        format!(" ({} matches)", matches)
    };

    let block = Block::default()
        .title(format!("Filter by name{}", result_count))
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(search_text).block(block);

    frame.render_widget(paragraph, area);
}
