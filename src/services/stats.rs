//! Aggregate stats refresh (user and installation counts)

use tracing::{debug, warn};

use crate::errors::Result;
use crate::registry::{AppDescriptor, AppRegistry};
use crate::transport::ServerApi;

pub const USER_CLASS: &str = "_User";
pub const INSTALLATION_CLASS: &str = "_Installation";

/// Counters fetched for one app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppStats {
    pub users: Option<u64>,
    pub installations: Option<u64>,
}

/// Fetch both counters; a failed count stays `None`
pub async fn fetch_stats(api: &dyn ServerApi, app: &AppDescriptor) -> AppStats {
    let (users, installations) = tokio::join!(
        api.class_count(&app.credentials, USER_CLASS),
        api.class_count(&app.credentials, INSTALLATION_CLASS),
    );

    let users = users
        .inspect_err(|e| warn!("Counting {} for {} failed: {}", USER_CLASS, app.slug, e))
        .ok();
    let installations = installations
        .inspect_err(|e| {
            warn!(
                "Counting {} for {} failed: {}",
                INSTALLATION_CLASS, app.slug, e
            )
        })
        .ok();

    AppStats {
        users,
        installations,
    }
}

/// Refresh counters of every reachable app and persist them.
///
/// Returns how many apps were updated. Unreachable apps are skipped and keep
/// their previous counters.
pub async fn refresh_all(api: &dyn ServerApi, registry: &AppRegistry) -> Result<usize> {
    let mut updated = 0;

    for app in registry.list_all() {
        if !app.is_reachable() {
            debug!("Skipping stats for unreachable app {}", app.slug);
            continue;
        }

        let stats = fetch_stats(api, &app).await;
        if registry.apply_stats(&app.slug, stats.users, stats.installations) {
            updated += 1;
        }
    }

    if updated > 0 {
        registry.save()?;
    }
    debug!("Stats refreshed for {} apps", updated);
    Ok(updated)
}
