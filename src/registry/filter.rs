//! Name filter used by the app list

use super::models::AppDescriptor;

/// Keep the descriptors whose name contains `query`, ignoring case.
///
/// An empty query keeps everything. Order is preserved.
pub fn filter_by_name<'a>(apps: &'a [AppDescriptor], query: &str) -> Vec<&'a AppDescriptor> {
    let query = query.to_lowercase();
    apps.iter().filter(|app| app.matches(&query)).collect()
}
