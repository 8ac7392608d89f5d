//! Clone progress feed
//!
//! Each application id gets a `watch` channel holding only the latest
//! percentage. Subscribers read the current value whenever they render; a
//! background poller pushes new values as the source reports them.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::registry::AppRegistry;
use crate::transport::ServerApi;

#[derive(Default)]
pub struct CloneProgressHub {
    channels: Mutex<HashMap<String, watch::Sender<u8>>>,
}

impl CloneProgressHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `app_id`; `initial` seeds the channel if it does not exist yet
    pub fn subscribe(&self, app_id: &str, initial: u8) -> watch::Receiver<u8> {
        let mut channels = self.channels.lock();
        channels
            .entry(app_id.to_string())
            .or_insert_with(|| watch::channel(initial).0)
            .subscribe()
    }

    /// Publish a new percentage; returns true if subscribers saw a change
    pub fn publish(&self, app_id: &str, progress: u8) -> bool {
        let progress = progress.min(100);
        let mut channels = self.channels.lock();
        let sender = channels
            .entry(app_id.to_string())
            .or_insert_with(|| watch::channel(0).0);

        sender.send_if_modified(|current| {
            if *current == progress {
                false
            } else {
                *current = progress;
                true
            }
        })
    }

    /// Latest known value without subscribing
    pub fn latest(&self, app_id: &str) -> Option<u8> {
        self.channels
            .lock()
            .get(app_id)
            .map(|sender| *sender.borrow())
    }

    /// Poll `api` for every app with a clone in progress and push the results
    pub fn spawn_poller(
        self: Arc<Self>,
        api: Arc<dyn ServerApi>,
        registry: Arc<AppRegistry>,
        interval: Duration,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;

                let app_ids = registry.cloning_app_ids();
                if app_ids.is_empty() {
                    continue;
                }

                match api.clone_progress(&app_ids).await {
                    Ok(entries) => {
                        for entry in entries {
                            if self.publish(&entry.app_id, entry.progress) {
                                trace!("Clone progress {} -> {}%", entry.app_id, entry.progress);
                            }
                        }
                    }
                    Err(e) => debug!("Clone progress poll failed: {}", e),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_sees_latest_value() {
        let hub = CloneProgressHub::new();
        let rx = hub.subscribe("app", 10);
        assert_eq!(*rx.borrow(), 10);

        assert!(hub.publish("app", 40));
        assert!(hub.publish("app", 55));
        assert_eq!(*rx.borrow(), 55);
        assert_eq!(hub.latest("app"), Some(55));
    }

    #[test]
    fn test_publish_same_value_is_not_a_change() {
        let hub = CloneProgressHub::new();
        let mut rx = hub.subscribe("app", 0);
        assert!(hub.publish("app", 20));
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        assert!(!hub.publish("app", 20));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_initial_only_applies_to_new_channel() {
        let hub = CloneProgressHub::new();
        hub.publish("app", 70);
        let rx = hub.subscribe("app", 5);
        assert_eq!(*rx.borrow(), 70);
    }

    #[test]
    fn test_progress_is_clamped() {
        let hub = CloneProgressHub::new();
        hub.publish("app", 250);
        assert_eq!(hub.latest("app"), Some(100));
        assert_eq!(hub.latest("other"), None);
    }
}
