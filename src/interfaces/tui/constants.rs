//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 事件循环轮询间隔（毫秒）
pub const TICK_RATE_MS: u64 = 200;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 5;

/// 卡片内 URL 显示截断长度
pub const URL_TRUNCATE_LENGTH: usize = 60;

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 添加应用弹窗
    pub const ADD_APP: PopupSize = PopupSize::new(70, 75);
    /// 应用详情弹窗
    pub const APP_DETAILS: PopupSize = PopupSize::new(75, 80);
    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 80);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(60, 35);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 成功色
    pub const SUCCESS: Color = Color::Green;
    /// 警告色
    pub const WARNING: Color = Color::Yellow;
    /// 错误色
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::Black;
}

/// 卡片状态文本
pub mod status_text {
    /// 服务器可达
    pub const ONLINE: &str = "ONLINE";
    /// 服务器不可达
    pub const OFFLINE: &str = "OFFLINE";
    /// 生产环境
    pub const PRODUCTION: &str = "PRODUCTION";
    /// 开发环境
    pub const DEVELOPMENT: &str = "DEVELOPMENT";
}
