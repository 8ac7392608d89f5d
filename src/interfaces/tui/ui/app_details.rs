//! Per-app detail popup

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use serde_json::Value;

use super::widgets::{EnvironmentBadge, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;
use crate::registry::AppDescriptor;
use crate::utils::format_metric;

/// Flatten the server's feature map into `(group, enabled flags)` rows
pub fn feature_summary(features: &Value) -> Vec<(String, String)> {
    let Some(groups) = features.as_object() else {
        return Vec::new();
    };

    groups
        .iter()
        .map(|(group, flags)| {
            let enabled = match flags {
                Value::Object(map) => {
                    let names: Vec<&str> = map
                        .iter()
                        .filter(|(_, v)| v.as_bool().unwrap_or(false))
                        .map(|(k, _)| k.as_str())
                        .collect();
                    if names.is_empty() {
                        "-".to_string()
                    } else {
                        names.join(", ")
                    }
                }
                Value::Bool(true) => "yes".to_string(),
                Value::Bool(false) => "no".to_string(),
                other => other.to_string(),
            };
            (group.clone(), enabled)
        })
        .collect()
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::Cyan)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn detail_lines(app: &AppDescriptor) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                app.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            EnvironmentBadge::from_production(app.production).span(),
        ]),
        Line::from(""),
        row("Slug", app.slug.clone()),
        row("Server URL", app.server_url().to_string()),
        row("Application ID", app.application_id().to_string()),
        row("Server version", app.server_info.version_label().to_string()),
        row("Users", format_metric(app.users)),
        row("Installations", format_metric(app.installations)),
        row(
            "Added",
            app.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
    ];

    let features = app
        .server_info
        .features()
        .map(feature_summary)
        .unwrap_or_default();
    if !features.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "FEATURES",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (group, enabled) in features {
            lines.push(row(&group, enabled));
        }
    }

    lines
}

pub fn draw_app_details_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("App Details", popup::APP_DETAILS)
        .theme_color(Color::Cyan)
        .render(frame, area);

    let descriptor = app
        .detail_slug
        .as_deref()
        .and_then(|slug| app.apps.iter().find(|a| a.slug == slug));

    let lines = match descriptor {
        Some(descriptor) => detail_lines(descriptor),
        None => vec![Line::from(Span::styled(
            "App not found",
            Style::default().fg(Color::Red),
        ))],
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}
