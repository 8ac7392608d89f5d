//! App registration, stats refresh and clipboard operations

use std::time::Instant;

use tracing::{debug, info};

use super::state::{App, AppEvent, CurrentScreen};
use crate::services::{refresh_all, register_app};

/// Which field of the selected app to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    ServerUrl,
    ApplicationId,
}

impl App {
    pub fn open_add_form(&mut self) {
        self.form.open(&self.default_server_url);
        self.current_screen = CurrentScreen::AddApp;
    }

    /// Discard the form; returns false while a submission is in flight
    pub fn cancel_add_form(&mut self) -> bool {
        if self.form.is_submitting() {
            return false;
        }
        self.form.clear();
        self.current_screen = CurrentScreen::Main;
        true
    }

    /// Probe the entered server in the background and register the app.
    ///
    /// A second call while the first is still running is ignored.
    pub fn submit_registration(&mut self) {
        if !self.form.begin_submit() {
            debug!("Registration already in progress, ignoring submit");
            return;
        }

        let candidate = self.form.candidate();
        self.set_status(format!(
            "Probing {}...",
            candidate.credentials.server_url
        ));
        info!(
            "Submitting app '{}' at {}",
            candidate.name, candidate.credentials.server_url
        );

        let api = self.api.clone();
        let registry = self.registry.clone();
        let tx = self.event_sender();
        tokio::spawn(async move {
            let result = register_app(api.as_ref(), registry.as_ref(), candidate)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Registered(result));
        });
    }

    /// Start a stats refresh unless one is already running
    pub fn request_refresh(&mut self) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;

        let api = self.api.clone();
        let registry = self.registry.clone();
        let tx = self.event_sender();
        tokio::spawn(async move {
            let result = refresh_all(api.as_ref(), registry.as_ref())
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::StatsRefreshed(result));
        });
    }

    /// True when the periodic refresh interval has elapsed (or never ran)
    pub fn refresh_due(&self) -> bool {
        match (self.refresh_interval, self.last_refresh) {
            (None, _) => false,
            (Some(_), None) => !self.refreshing,
            (Some(interval), Some(last)) => !self.refreshing && last.elapsed() >= interval,
        }
    }

    /// Open the detail screen for the selected app.
    ///
    /// Unreachable servers have nothing to show, so navigation is refused.
    pub fn open_selected_details(&mut self) {
        let Some(app) = self.get_selected_app() else {
            return;
        };

        match app.server_info.error() {
            Some(error) => {
                let message = format!("{} is not reachable: {}", app.name, error);
                self.set_error(message);
            }
            None => {
                self.detail_slug = Some(app.slug.clone());
                self.current_screen = CurrentScreen::AppDetails;
            }
        }
    }

    pub fn close_details(&mut self) {
        self.detail_slug = None;
        self.current_screen = CurrentScreen::Main;
    }

    pub fn copy_selected(&mut self, target: CopyTarget) {
        let Some(app) = self.get_selected_app() else {
            return;
        };
        let (label, text) = match target {
            CopyTarget::ServerUrl => ("server URL", app.server_url().to_string()),
            CopyTarget::ApplicationId => ("application ID", app.application_id().to_string()),
        };

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(&text)) {
            Ok(()) => self.set_status(format!("Copied {}: {}", label, text)),
            Err(e) => self.set_error(format!("Clipboard unavailable: {}", e)),
        }
    }

    pub fn mark_refreshed_now(&mut self) {
        self.last_refresh = Some(Instant::now());
    }
}
