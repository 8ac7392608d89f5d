//! 居中弹窗容器，所有覆盖在应用列表上的窗口共用

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::PopupSize;

pub struct Popup<'a> {
    title: &'a str,
    color: Color,
    size: PopupSize,
    padding: Margin,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize) -> Self {
        Self {
            title,
            color: Color::Cyan,
            size,
            padding: Margin::new(2, 1),
        }
    }

    /// 边框与标题颜色
    pub fn theme_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn padding(mut self, horizontal: u16, vertical: u16) -> Self {
        self.padding = Margin::new(horizontal, vertical);
        self
    }

    /// Clear the area under the popup, draw its frame and return the content area
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let popup_area = centered_rect(self.size.width, self.size.height, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.color))
            .title(Line::from(format!(" {} ", self.title)).centered())
            .title_style(Style::default().fg(self.color).bold());
        frame.render_widget(block, popup_area);

        popup_area.inner(self.padding)
    }
}

/// Rect of `percent_x` × `percent_y` of `area`, centered in it
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.x, 25);
        assert!((24..=26).contains(&rect.height));
        assert!(rect.bottom() <= area.bottom());
    }

    #[test]
    fn test_centered_rect_in_offset_area() {
        let area = Rect::new(10, 5, 80, 40);
        let rect = centered_rect(50, 25, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.x, 30);
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
    }
}
