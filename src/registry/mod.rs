//! App registry
//!
//! Holds every registered app descriptor in memory and mirrors the list to a
//! JSON file. Operations: list all, add one, apply refreshed stats.

mod filter;
pub mod models;

pub use filter::filter_by_name;
pub use models::{AppCredentials, AppDescriptor, CloneStatus, ServerInfo, UNKNOWN_VERSION};

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::errors::{AppboardError, Result};
use crate::utils::unique_slug;

pub struct AppRegistry {
    file_path: Option<PathBuf>,
    apps: RwLock<Vec<AppDescriptor>>,
}

impl AppRegistry {
    /// Open a registry backed by `path`, creating an empty file if missing
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let apps = Self::load_from_file(&file_path)?;
        info!(
            "AppRegistry loaded {} apps from {}",
            apps.len(),
            file_path.display()
        );

        Ok(Self {
            file_path: Some(file_path),
            apps: RwLock::new(apps),
        })
    }

    /// Registry without a backing file
    pub fn in_memory() -> Self {
        Self {
            file_path: None,
            apps: RwLock::new(Vec::new()),
        }
    }

    fn load_from_file(path: &Path) -> Result<Vec<AppDescriptor>> {
        match fs::read_to_string(path) {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => serde_json::from_str::<Vec<AppDescriptor>>(&content).map_err(|e| {
                error!("Failed to parse registry file {}: {}", path.display(), e);
                AppboardError::serialization(format!(
                    "Failed to parse registry file {}: {}",
                    path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Registry file not found, creating {}", path.display());
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                    && !parent.exists()
                {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, "[]")?;
                Ok(Vec::new())
            }
            Err(e) => Err(AppboardError::file_operation(format!(
                "Failed to read registry file {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn save_to_file(&self, apps: &[AppDescriptor]) -> Result<()> {
        let Some(path) = &self.file_path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(apps)?;
        fs::write(path, json)?;
        debug!("Registry saved ({} apps)", apps.len());
        Ok(())
    }

    /// Persist the current list
    pub fn save(&self) -> Result<()> {
        let apps = self.apps.read();
        self.save_to_file(&apps)
    }

    /// Snapshot of every descriptor in insertion order
    pub fn list_all(&self) -> Vec<AppDescriptor> {
        self.apps.read().clone()
    }

    pub fn len(&self) -> usize {
        self.apps.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.read().is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<AppDescriptor> {
        self.apps.read().iter().find(|app| app.slug == slug).cloned()
    }

    /// Insert a descriptor and persist the list.
    ///
    /// Duplicates are accepted; the slug is suffixed to stay unique. The
    /// descriptor stays in memory even when writing the file fails.
    pub fn add(&self, mut descriptor: AppDescriptor) -> Result<AppDescriptor> {
        let mut apps = self.apps.write();

        if apps.iter().any(|app| {
            app.credentials.server_url == descriptor.credentials.server_url
                && app.credentials.application_id == descriptor.credentials.application_id
        }) {
            warn!(
                "App {} at {} is already registered, adding a duplicate",
                descriptor.credentials.application_id, descriptor.credentials.server_url
            );
        }

        descriptor.slug = unique_slug(&descriptor.slug, apps.iter().map(|a| a.slug.as_str()));
        apps.push(descriptor.clone());
        info!("Registered app '{}' as {}", descriptor.name, descriptor.slug);

        self.save_to_file(&apps)?;
        Ok(descriptor)
    }

    /// Store refreshed counters for one app; returns false if the slug is unknown
    pub fn apply_stats(&self, slug: &str, users: Option<u64>, installations: Option<u64>) -> bool {
        let mut apps = self.apps.write();
        match apps.iter_mut().find(|app| app.slug == slug) {
            Some(app) => {
                app.users = users;
                app.installations = installations;
                true
            }
            None => false,
        }
    }

    /// Application ids of apps with a clone in progress
    pub fn cloning_app_ids(&self) -> Vec<String> {
        self.apps
            .read()
            .iter()
            .filter(|app| app.is_cloning())
            .map(|app| app.application_id().to_string())
            .collect()
    }
}
