#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use appboard::registry::AppCredentials;
use appboard::transport::{CloneProgress, ProbeErrorKind, ServerApi, ServerInfoResponse};
use async_trait::async_trait;
use parking_lot::Mutex;

// 模拟 Parse Server，用于测试
pub struct FakeServer {
    pub info: Mutex<Result<ServerInfoResponse, ProbeErrorKind>>,
    pub counts: Mutex<HashMap<String, Result<u64, ProbeErrorKind>>>,
    pub progress: Mutex<Vec<CloneProgress>>,
    pub info_calls: AtomicUsize,
    pub count_calls: AtomicUsize,
}

impl FakeServer {
    pub fn reachable(version: &str) -> Self {
        Self::with_info(Ok(ServerInfoResponse {
            parse_server_version: Some(version.to_string()),
            features: serde_json::json!({
                "globalConfig": {"create": true, "read": true},
                "hooks": {"create": false},
            }),
        }))
    }

    pub fn failing(kind: ProbeErrorKind) -> Self {
        Self::with_info(Err(kind))
    }

    fn with_info(info: Result<ServerInfoResponse, ProbeErrorKind>) -> Self {
        Self {
            info: Mutex::new(info),
            counts: Mutex::new(HashMap::new()),
            progress: Mutex::new(Vec::new()),
            info_calls: AtomicUsize::new(0),
            count_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_count(&self, class_name: &str, count: Result<u64, ProbeErrorKind>) {
        self.counts.lock().insert(class_name.to_string(), count);
    }

    pub fn set_progress(&self, app_id: &str, progress: u8) {
        let mut entries = self.progress.lock();
        entries.retain(|e| e.app_id != app_id);
        entries.push(CloneProgress {
            app_id: app_id.to_string(),
            progress,
        });
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ServerApi for FakeServer {
    async fn server_info(
        &self,
        _credentials: &AppCredentials,
    ) -> Result<ServerInfoResponse, ProbeErrorKind> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        self.info.lock().clone()
    }

    async fn class_count(
        &self,
        _credentials: &AppCredentials,
        class_name: &str,
    ) -> Result<u64, ProbeErrorKind> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.counts
            .lock()
            .get(class_name)
            .cloned()
            .unwrap_or(Err(ProbeErrorKind::Other(None)))
    }

    async fn clone_progress(
        &self,
        app_ids: &[String],
    ) -> Result<Vec<CloneProgress>, ProbeErrorKind> {
        Ok(self
            .progress
            .lock()
            .iter()
            .filter(|e| app_ids.contains(&e.app_id))
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub fn credentials(app_id: &str) -> AppCredentials {
    AppCredentials::new("http://localhost:1337/parse", app_id, "masterKey")
}
