use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - registry: 应用注册表的存储位置
/// - probe: serverInfo 探测请求
/// - refresh: 用户数/安装数的定时刷新
/// - progress: 克隆进度推送源
/// - form: 添加应用表单的默认值
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：APPBOARD，分隔符：__
    /// 示例：APPBOARD__PROBE__TIMEOUT_SECS=5
    pub fn load(path: Option<&str>) -> Self {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);
        match Self::try_load(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    /// 加载配置，失败时返回错误而不是回退到默认值
    pub fn try_load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 APPBOARD，分隔符 __
            .add_source(
                Environment::with_prefix("APPBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 注册表配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_path")]
    pub path: String,
}

/// serverInfo 探测配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// HTTP 全局超时（秒）
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
    /// 相对于 server URL 的 serverInfo 路径
    #[serde(default = "default_server_info_path")]
    pub server_info_path: String,
}

/// 统计刷新配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    #[serde(default = "default_refresh_enabled")]
    pub enabled: bool,
    #[serde(default = "default_refresh_interval")]
    pub interval_secs: u64,
}

/// 克隆进度配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// 返回 `[{"appId": "...", "progress": 42}]` 的地址，未设置则不轮询
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default = "default_progress_interval")]
    pub poll_interval_secs: u64,
}

/// 添加应用表单配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_form_server_url")]
    pub default_server_url: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_registry_path() -> String {
    "apps.json".to_string()
}

fn default_probe_timeout() -> u64 {
    10
}

fn default_server_info_path() -> String {
    "serverInfo".to_string()
}

fn default_refresh_enabled() -> bool {
    true
}

fn default_refresh_interval() -> u64 {
    60
}

fn default_progress_interval() -> u64 {
    2
}

fn default_form_server_url() -> String {
    "http://localhost:1337/parse".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

// ============================================================
// Default implementations
// ============================================================

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: default_registry_path(),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_probe_timeout(),
            server_info_path: default_server_info_path(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            enabled: default_refresh_enabled(),
            interval_secs: default_refresh_interval(),
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            poll_interval_secs: default_progress_interval(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_server_url: default_form_server_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
        }
    }
}
