//! Add app command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::{AppCredentials, AppRegistry};
use crate::services::{RegistrationCandidate, register_app};
use crate::transport::ServerApi;

pub async fn add_app(
    api: &dyn ServerApi,
    registry: &AppRegistry,
    server_url: String,
    app_id: String,
    master_key: String,
    name: Option<String>,
) -> Result<(), CliError> {
    let name = name.unwrap_or_else(|| app_id.clone());
    let candidate =
        RegistrationCandidate::new(name, AppCredentials::new(server_url, app_id, master_key));

    println!(
        "{} Probing {}...",
        "ℹ".bold().blue(),
        candidate.credentials.server_url.blue().underline()
    );
    let app = register_app(api, registry, candidate).await?;

    match app.server_info.error() {
        None => println!(
            "{} Added app {} ({}), server version {}",
            "✓".bold().green(),
            app.name.cyan(),
            app.slug.magenta(),
            app.server_info.version_label().yellow()
        ),
        Some(error) => println!(
            "{} Added app {} ({}), but the server is not reachable: {}",
            "!".bold().yellow(),
            app.name.cyan(),
            app.slug.magenta(),
            error.red()
        ),
    }
    Ok(())
}
