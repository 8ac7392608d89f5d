mod common;

use appboard::registry::{AppDescriptor, AppRegistry, ServerInfo};
use appboard::services::stats::{INSTALLATION_CLASS, USER_CLASS};
use appboard::services::{AppStats, fetch_stats, refresh_all};
use appboard::transport::ProbeErrorKind;
use common::{FakeServer, credentials};

fn reachable_app(name: &str) -> AppDescriptor {
    AppDescriptor::new(
        name,
        credentials(name),
        ServerInfo::Reachable {
            parse_server_version: Some("2.8.4".to_string()),
            features: serde_json::Value::Null,
        },
    )
}

#[tokio::test]
async fn test_fetch_stats_both_counts() {
    let api = FakeServer::reachable("2.8.4");
    api.set_count(USER_CLASS, Ok(1234));
    api.set_count(INSTALLATION_CLASS, Ok(56));

    let stats = fetch_stats(&api, &reachable_app("Shop")).await;
    assert_eq!(
        stats,
        AppStats {
            users: Some(1234),
            installations: Some(56),
        }
    );
}

#[tokio::test]
async fn test_fetch_stats_failed_count_stays_empty() {
    let api = FakeServer::reachable("2.8.4");
    api.set_count(USER_CLASS, Ok(10));
    api.set_count(INSTALLATION_CLASS, Err(ProbeErrorKind::ConnectionFailed));

    let stats = fetch_stats(&api, &reachable_app("Shop")).await;
    assert_eq!(stats.users, Some(10));
    assert_eq!(stats.installations, None);
}

#[tokio::test]
async fn test_refresh_all_skips_unreachable_apps() {
    let api = FakeServer::reachable("2.8.4");
    api.set_count(USER_CLASS, Ok(7));
    api.set_count(INSTALLATION_CLASS, Ok(3));

    let registry = AppRegistry::in_memory();
    let online = registry.add(reachable_app("Online")).unwrap();
    let offline = registry
        .add(AppDescriptor::new(
            "Offline",
            credentials("off"),
            ServerInfo::unreachable("unable to connect to server"),
        ))
        .unwrap();

    let updated = refresh_all(&api, &registry).await.unwrap();
    assert_eq!(updated, 1);

    let online = registry.get(&online.slug).unwrap();
    assert_eq!(online.users, Some(7));
    assert_eq!(online.installations, Some(3));

    let offline = registry.get(&offline.slug).unwrap();
    assert_eq!(offline.users, None);
    assert_eq!(offline.installations, None);
}

#[tokio::test]
async fn test_refresh_all_persists_counts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("apps.json");
    let api = FakeServer::reachable("2.8.4");
    api.set_count(USER_CLASS, Ok(2_500));
    api.set_count(INSTALLATION_CLASS, Ok(0));

    let registry = AppRegistry::open(&path).unwrap();
    registry.add(reachable_app("Shop")).unwrap();
    refresh_all(&api, &registry).await.unwrap();

    let reopened = AppRegistry::open(&path).unwrap();
    let app = &reopened.list_all()[0];
    assert_eq!(app.users, Some(2_500));
    assert_eq!(app.installations, Some(0));
}

#[tokio::test]
async fn test_refresh_all_on_empty_registry() {
    let api = FakeServer::reachable("2.8.4");
    let registry = AppRegistry::in_memory();
    assert_eq!(refresh_all(&api, &registry).await.unwrap(), 0);
    assert_eq!(api.count_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}
