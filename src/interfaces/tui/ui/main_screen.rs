use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::ui::widgets::AppCard;

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.display_apps();

    if visible.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(vec![Span::styled(
                "No apps match your search",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    app.search_input.as_str(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "[Esc]",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to clear the filter", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let empty = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(format!("Search: \"{}\"", app.search_input))
                    .title_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<_> = visible
        .iter()
        .map(|descriptor| AppCard::new(descriptor, app.clone_progress_for(descriptor)).to_list_item())
        .collect();

    let title = if app.is_searching() {
        format!(
            "Search: \"{}\" ({} of {} apps)",
            app.search_input,
            visible.len(),
            app.apps.len()
        )
    } else {
        format!("Apps ({})", app.apps.len())
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}
