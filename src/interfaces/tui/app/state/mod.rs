//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，以及拆分后的子状态模块

mod form_state;

pub use form_state::{EditingField, FormMessage, FormState, SubmissionState};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;
use tokio::sync::{mpsc, watch};

use crate::registry::{AppDescriptor, AppRegistry, filter_by_name};
use crate::services::CloneProgressHub;
use crate::transport::ServerApi;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    AddApp,
    AppDetails,
    Help,
    Exiting,
}

/// 后台任务完成后发回事件循环的消息
#[derive(Debug)]
pub enum AppEvent {
    /// 注册完成（探测结果已写入描述符）
    Registered(Result<AppDescriptor, String>),
    /// 统计刷新完成，携带更新的应用数
    StatsRefreshed(Result<usize, String>),
}

pub struct App {
    pub registry: Arc<AppRegistry>,
    pub api: Arc<dyn ServerApi>,
    pub progress: Arc<CloneProgressHub>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,

    /// 注册表快照，渲染时使用
    pub apps: Vec<AppDescriptor>,
    pub current_screen: CurrentScreen,

    // Add app form
    pub form: FormState,
    pub default_server_url: String,

    // Search functionality
    pub search_input: String,
    pub inline_search_mode: bool,

    // UI state
    pub selected_index: usize,
    pub list_state: ListState,
    pub status_message: String,
    pub error_message: String,
    pub detail_slug: Option<String>,

    // Stats refresh
    pub refreshing: bool,
    pub refresh_interval: Option<Duration>,
    pub last_refresh: Option<Instant>,

    progress_feeds: HashMap<String, watch::Receiver<u8>>,
}

impl App {
    pub fn new(
        registry: Arc<AppRegistry>,
        api: Arc<dyn ServerApi>,
        progress: Arc<CloneProgressHub>,
        default_server_url: impl Into<String>,
    ) -> App {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let mut app = App {
            registry,
            api,
            progress,
            events_tx,
            events_rx,
            apps: Vec::new(),
            current_screen: CurrentScreen::Main,
            form: FormState::new(),
            default_server_url: default_server_url.into(),
            search_input: String::new(),
            inline_search_mode: false,
            selected_index: 0,
            list_state,
            status_message: String::new(),
            error_message: String::new(),
            detail_slug: None,
            refreshing: false,
            refresh_interval: None,
            last_refresh: None,
            progress_feeds: HashMap::new(),
        };
        app.reload_apps();
        app
    }

    /// 设置定时刷新统计的间隔，`None` 表示只在手动触发时刷新
    pub fn with_refresh_interval(mut self, interval: Option<Duration>) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Sender handed to background tasks
    pub fn event_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.events_tx.clone()
    }

    /// 从注册表重新读取快照，并为克隆中的应用订阅进度
    pub fn reload_apps(&mut self) {
        self.apps = self.registry.list_all();

        for app in self.apps.iter().filter(|app| app.is_cloning()) {
            let app_id = app.application_id();
            if !self.progress_feeds.contains_key(app_id) {
                let rx = self
                    .progress
                    .subscribe(app_id, app.clone_progress.unwrap_or(0));
                self.progress_feeds.insert(app_id.to_string(), rx);
            }
        }

        self.clamp_selection();
    }

    /// Apps matching the current search text
    pub fn display_apps(&self) -> Vec<&AppDescriptor> {
        filter_by_name(&self.apps, &self.search_input)
    }

    pub fn display_count(&self) -> usize {
        self.display_apps().len()
    }

    pub fn is_searching(&self) -> bool {
        !self.search_input.is_empty()
    }

    pub fn get_selected_app(&self) -> Option<&AppDescriptor> {
        self.display_apps().get(self.selected_index).copied()
    }

    /// Latest clone percentage: pushed value, then stored value, then 0
    pub fn clone_progress_for(&self, app: &AppDescriptor) -> u8 {
        self.progress_feeds
            .get(app.application_id())
            .map(|rx| *rx.borrow())
            .or(app.clone_progress)
            .unwrap_or(0)
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    /// Drain finished background work; returns true if anything arrived
    pub fn drain_events(&mut self) -> bool {
        let mut received = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
            received = true;
        }
        received
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Registered(result) => {
                // 无论探测结果如何，表单都会关闭
                self.form.finish_submit();
                if self.current_screen == CurrentScreen::AddApp {
                    self.current_screen = CurrentScreen::Main;
                }
                self.reload_apps();

                match result {
                    Ok(app) => match app.server_info.error() {
                        None => self.set_status(format!("Added app {}", app.name)),
                        Some(error) => self.set_status(format!(
                            "Added app {} (server not reachable: {})",
                            app.name, error
                        )),
                    },
                    Err(e) => self.set_error(format!("Failed to save app: {}", e)),
                }
            }
            AppEvent::StatsRefreshed(result) => {
                self.refreshing = false;
                self.mark_refreshed_now();
                match result {
                    Ok(updated) => {
                        self.reload_apps();
                        tracing::debug!("TUI picked up stats for {} apps", updated);
                    }
                    Err(e) => self.set_error(format!("Failed to refresh stats: {}", e)),
                }
            }
        }
    }
}
