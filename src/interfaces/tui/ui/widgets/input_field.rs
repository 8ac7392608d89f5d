//! 通用输入框组件
//!
//! 用于表单中的文本输入，支持：
//! - 激活状态高亮
//! - 占位符提示
//! - 密钥遮蔽
//! - 提交期间锁定

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("Server URL", &app.form.server_url)
///     .active(true)
///     .placeholder("http://localhost:1337/parse")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 输入值
    value: &'a str,
    /// 是否处于激活状态
    is_active: bool,
    /// 占位符文本
    placeholder: Option<&'a str>,
    /// 是否遮蔽输入
    masked: bool,
    /// 是否锁定（提交中）
    locked: bool,
}

impl<'a> InputField<'a> {
    /// 创建新的输入框
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            placeholder: None,
            masked: false,
            locked: false,
        }
    }

    /// 设置激活状态
    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 设置占位符
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 设置遮蔽模式
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// 锁定输入
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// 获取显示的标题
    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            title = format!("{} ({})", self.title, placeholder);
        }

        if self.locked {
            title.push_str(" [locked]");
        }

        title
    }

    /// 获取边框样式
    fn border_style(&self) -> Style {
        if self.locked {
            Style::default().fg(colors::MUTED)
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 获取显示的值
    fn display_value(&self) -> String {
        if self.masked && !self.value.is_empty() {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }

    /// 渲染输入框，`area` 高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.display_value()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}
