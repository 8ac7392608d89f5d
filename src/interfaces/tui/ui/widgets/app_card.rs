//! 应用摘要卡片
//!
//! 列表中每个应用一张卡片：图标、名称、环境徽章、可达性、用户数与安装数，
//! 以及克隆进度提示

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

use super::status_indicator::{EnvironmentBadge, Reachability};
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::registry::{AppDescriptor, CloneStatus};
use crate::utils::format_metric;

/// 有图标时显示的符号
const ICON_GLYPH: &str = "◆";
/// 无图标时的占位符
const ICON_PLACEHOLDER: &str = "◇";

pub struct AppCard<'a> {
    app: &'a AppDescriptor,
    /// 克隆进度（仅在克隆中时使用）
    clone_progress: u8,
}

impl<'a> AppCard<'a> {
    pub fn new(app: &'a AppDescriptor, clone_progress: u8) -> Self {
        Self {
            app,
            clone_progress,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.app.icon.as_deref() {
            Some(icon) if !icon.is_empty() => ICON_GLYPH,
            _ => ICON_PLACEHOLDER,
        }
    }

    /// "Server not reachable: ..." or the URL and version
    pub fn reachability_line(&self) -> String {
        match self.app.server_info.error() {
            Some(error) => format!("Server not reachable: {}", error),
            None => format!(
                "Server URL: {}  Server version: {}",
                truncate(self.app.server_url(), URL_TRUNCATE_LENGTH),
                self.app.server_info.version_label()
            ),
        }
    }

    pub fn metrics_line(&self) -> String {
        format!(
            "Users: {}   Installations: {}",
            format_metric(self.app.users),
            format_metric(self.app.installations)
        )
    }

    pub fn clone_note(&self) -> Option<String> {
        match self.app.clone_status {
            Some(CloneStatus::InProgress) => {
                Some(format!("Cloning is {}% complete", self.clone_progress))
            }
            Some(CloneStatus::Failed) => Some("Clone failed".to_string()),
            _ => None,
        }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let reachability = Reachability::from_server_info(&self.app.server_info);
        let badge = EnvironmentBadge::from_production(self.app.production);

        let icon_style = if self.app.icon.is_some() {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::MUTED)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(self.icon(), icon_style),
                Span::raw(" "),
                Span::styled(
                    self.app.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                badge.span(),
                Span::raw("  "),
                reachability.span(),
            ]),
            Line::from(Span::styled(
                format!("  {}", self.reachability_line()),
                if self.app.is_reachable() {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default().fg(colors::ERROR)
                },
            )),
            Line::from(Span::styled(
                format!("  {}", self.metrics_line()),
                Style::default().fg(colors::SUCCESS),
            )),
        ];

        if let Some(note) = self.clone_note() {
            let color = match self.app.clone_status {
                Some(CloneStatus::Failed) => colors::ERROR,
                _ => colors::WARNING,
            };
            lines.push(Line::from(Span::styled(
                format!("  {}", note),
                Style::default().fg(color).add_modifier(Modifier::ITALIC),
            )));
        }

        lines.push(Line::from(""));
        lines
    }

    pub fn to_list_item(&self) -> ListItem<'static> {
        ListItem::new(self.lines())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
