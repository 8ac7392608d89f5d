use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, EditingField, SubmissionState};
use crate::interfaces::tui::constants::popup;

pub fn draw_add_app_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Add New App", popup::ADD_APP)
        .theme_color(Color::Green)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Server URL
            Constraint::Length(3), // App name
            Constraint::Length(3), // Application ID
            Constraint::Length(3), // Master key
            Constraint::Length(1),
            Constraint::Min(1), // Hint / progress
        ])
        .split(inner_area);

    let submitting = app.form.is_submitting();

    for (field, chunk) in EditingField::ALL.iter().zip(chunks.iter()) {
        let mut input = InputField::new(field.display_title(), app.form.value(*field))
            .active(app.form.currently_editing == Some(*field))
            .locked(submitting);

        input = match field {
            EditingField::ServerUrl => input.placeholder("http://localhost:1337/parse"),
            EditingField::AppName => input.placeholder("shown on the card"),
            EditingField::AppId => input,
            EditingField::MasterKey => input.masked(),
        };
        input.render(frame, *chunk);
    }

    let hint = match app.form.submission {
        SubmissionState::Submitting => Line::from(vec![Span::styled(
            "Checking the server, please wait...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        SubmissionState::Done => Line::from(vec![Span::styled(
            "App saved",
            Style::default().fg(Color::Green),
        )]),
        SubmissionState::Idle => Line::from(vec![
            Span::styled("The server is probed once with ", Style::default().fg(Color::DarkGray)),
            Span::styled("serverInfo", Style::default().fg(Color::Cyan)),
            Span::styled(
                "; the app is added even if it cannot be reached.",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    };

    let paragraph = Paragraph::new(hint).alignment(Alignment::Center);
    frame.render_widget(paragraph, chunks[5]);
}
