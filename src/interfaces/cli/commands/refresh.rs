//! Refresh stats command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::AppRegistry;
use crate::services::refresh_all;
use crate::transport::ServerApi;

use super::list_apps;

pub async fn refresh_stats(api: &dyn ServerApi, registry: &AppRegistry) -> Result<(), CliError> {
    let updated = refresh_all(api, registry).await?;
    println!(
        "{} Refreshed stats for {} of {} apps",
        "✓".bold().green(),
        updated.to_string().green(),
        registry.len().to_string().green()
    );
    list_apps(registry, None, false)
}
