mod common;

use std::sync::Arc;
use std::time::Duration;

use appboard::registry::{AppDescriptor, AppRegistry, CloneStatus, ServerInfo};
use appboard::services::CloneProgressHub;
use appboard::transport::ServerApi;
use common::{FakeServer, credentials};

fn cloning_app(app_id: &str) -> AppDescriptor {
    let mut app = AppDescriptor::new(app_id, credentials(app_id), ServerInfo::unreachable("x"));
    app.clone_status = Some(CloneStatus::InProgress);
    app.clone_progress = Some(5);
    app
}

#[tokio::test]
async fn test_poller_pushes_latest_progress() {
    let fake = Arc::new(FakeServer::reachable("2.8.4"));
    fake.set_progress("copy", 42);
    fake.set_progress("other", 99);

    let registry = Arc::new(AppRegistry::in_memory());
    registry.add(cloning_app("copy")).unwrap();
    registry.add(AppDescriptor::new("idle", credentials("idle"), ServerInfo::unreachable("x"))).unwrap();
    assert_eq!(registry.cloning_app_ids(), vec!["copy".to_string()]);

    let hub = Arc::new(CloneProgressHub::new());
    let mut rx = hub.subscribe("copy", 5);

    let api: Arc<dyn ServerApi> = fake.clone();
    let handle = hub
        .clone()
        .spawn_poller(api, registry.clone(), Duration::from_millis(10));

    tokio::time::timeout(Duration::from_secs(2), rx.changed())
        .await
        .expect("progress was not pushed")
        .unwrap();
    assert_eq!(*rx.borrow(), 42);
    // only apps with a clone in progress are polled
    assert_eq!(hub.latest("other"), None);

    fake.set_progress("copy", 80);
    tokio::time::timeout(Duration::from_secs(2), rx.changed())
        .await
        .expect("second update was not pushed")
        .unwrap();
    assert_eq!(*rx.borrow(), 80);

    handle.abort();
}

#[tokio::test]
async fn test_late_subscriber_reads_current_value() {
    let hub = CloneProgressHub::new();
    hub.publish("copy", 30);
    hub.publish("copy", 60);

    let rx = hub.subscribe("copy", 0);
    assert_eq!(*rx.borrow(), 60);
}
