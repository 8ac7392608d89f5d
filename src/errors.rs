use std::fmt;

#[derive(Debug, Clone)]
pub enum AppboardError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    NotFound(String),
    Transport(String),
    Terminal(String),
    Logging(String),
}

impl AppboardError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AppboardError::Config(_) => "E001",
            AppboardError::FileOperation(_) => "E002",
            AppboardError::Serialization(_) => "E003",
            AppboardError::NotFound(_) => "E004",
            AppboardError::Transport(_) => "E005",
            AppboardError::Terminal(_) => "E006",
            AppboardError::Logging(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AppboardError::Config(_) => "Configuration Error",
            AppboardError::FileOperation(_) => "File Operation Error",
            AppboardError::Serialization(_) => "Serialization Error",
            AppboardError::NotFound(_) => "Resource Not Found",
            AppboardError::Transport(_) => "Transport Error",
            AppboardError::Terminal(_) => "Terminal Error",
            AppboardError::Logging(_) => "Logging Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AppboardError::Config(msg) => msg,
            AppboardError::FileOperation(msg) => msg,
            AppboardError::Serialization(msg) => msg,
            AppboardError::NotFound(msg) => msg,
            AppboardError::Transport(msg) => msg,
            AppboardError::Terminal(msg) => msg,
            AppboardError::Logging(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AppboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AppboardError {}

// 便捷的构造函数
impl AppboardError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        AppboardError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        AppboardError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        AppboardError::Serialization(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        AppboardError::NotFound(msg.into())
    }

    pub fn transport<T: Into<String>>(msg: T) -> Self {
        AppboardError::Transport(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        AppboardError::Terminal(msg.into())
    }

    pub fn logging<T: Into<String>>(msg: T) -> Self {
        AppboardError::Logging(msg.into())
    }
}

impl From<std::io::Error> for AppboardError {
    fn from(err: std::io::Error) -> Self {
        AppboardError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AppboardError {
    fn from(err: serde_json::Error) -> Self {
        AppboardError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for AppboardError {
    fn from(err: toml::ser::Error) -> Self {
        AppboardError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AppboardError {
    fn from(err: config::ConfigError) -> Self {
        AppboardError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppboardError>;
