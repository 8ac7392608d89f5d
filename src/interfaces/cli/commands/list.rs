//! List apps command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::registry::{AppDescriptor, AppRegistry, CloneStatus, filter_by_name};
use crate::utils::format_metric;

/// One line per app, without colours
pub fn format_app_line(app: &AppDescriptor) -> String {
    let status = match app.server_info.error() {
        Some(error) => format!("not reachable: {}", error),
        None => format!(
            "{} (version {})",
            app.server_url(),
            app.server_info.version_label()
        ),
    };
    let env = if app.production { "production" } else { "development" };

    let mut line = format!(
        "{} [{}] {} | users: {} | installations: {} | {}",
        app.name,
        app.slug,
        env,
        format_metric(app.users),
        format_metric(app.installations),
        status
    );
    match app.clone_status {
        Some(CloneStatus::InProgress) => line.push_str(&format!(
            " | cloning {}%",
            app.clone_progress.unwrap_or(0)
        )),
        Some(CloneStatus::Failed) => line.push_str(" | clone failed"),
        _ => {}
    }
    line
}

pub fn list_apps(registry: &AppRegistry, filter: Option<&str>, json: bool) -> Result<(), CliError> {
    let apps = registry.list_all();
    let visible = filter_by_name(&apps, filter.unwrap_or(""));

    if json {
        let out = serde_json::to_string_pretty(&visible)
            .map_err(|e| CliError::CommandError(format!("Failed to serialize apps: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    if apps.is_empty() {
        println!(
            "{} You don't have any apps. Add one with {}",
            "ℹ".bold().blue(),
            "appboard add".cyan()
        );
        return Ok(());
    }

    println!("{}", "Registered apps:".bold().green());
    println!();
    for app in &visible {
        let line = format_app_line(app);
        if app.is_reachable() {
            println!("  {} {}", "●".green(), line);
        } else {
            println!("  {} {}", "●".red(), line.dimmed());
        }
    }
    println!();
    println!(
        "{} Showing {} of {} apps",
        "ℹ".bold().blue(),
        visible.len().to_string().green(),
        apps.len().to_string().green()
    );
    Ok(())
}
