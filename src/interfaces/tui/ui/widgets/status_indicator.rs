//! 应用状态指示器
//!
//! 服务器可达性与环境徽章

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::interfaces::tui::constants::{colors, status_text};
use crate::registry::ServerInfo;

/// 服务器可达性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Online,
    Offline,
}

impl Reachability {
    pub fn from_server_info(info: &ServerInfo) -> Self {
        if info.is_reachable() {
            Self::Online
        } else {
            Self::Offline
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Online => status_text::ONLINE,
            Self::Offline => status_text::OFFLINE,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Online => colors::SUCCESS,
            Self::Offline => colors::ERROR,
        }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(
            format!("● {}", self.text()),
            Style::default().fg(self.color()),
        )
    }
}

/// 环境徽章
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentBadge {
    Production,
    Development,
}

impl EnvironmentBadge {
    pub fn from_production(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Production => status_text::PRODUCTION,
            Self::Development => status_text::DEVELOPMENT,
        }
    }

    pub fn span(&self) -> Span<'static> {
        let bg = match self {
            Self::Production => colors::WARNING,
            Self::Development => colors::PRIMARY,
        };
        Span::styled(
            format!(" {} ", self.text()),
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    }
}
