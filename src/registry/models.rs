//! App descriptor data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::utils::slugify;

/// 服务器不可达时展示的版本号
pub const UNKNOWN_VERSION: &str = "unknown";

/// Connection credentials of one Parse Server application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppCredentials {
    #[serde(rename = "serverURL")]
    pub server_url: String,
    pub application_id: String,
    pub master_key: String,
}

impl AppCredentials {
    pub fn new(
        server_url: impl Into<String>,
        application_id: impl Into<String>,
        master_key: impl Into<String>,
    ) -> Self {
        Self {
            server_url: server_url.into(),
            application_id: application_id.into(),
            master_key: master_key.into(),
        }
    }
}

/// Result of the last `serverInfo` probe
///
/// Exactly one classification exists at any time; a new probe replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServerInfo {
    Reachable {
        #[serde(default)]
        parse_server_version: Option<String>,
        #[serde(default)]
        features: serde_json::Value,
    },
    Unreachable {
        error: String,
    },
}

impl ServerInfo {
    pub fn unreachable(error: impl Into<String>) -> Self {
        ServerInfo::Unreachable {
            error: error.into(),
        }
    }

    /// Error text when the server could not be used
    pub fn error(&self) -> Option<&str> {
        match self {
            ServerInfo::Unreachable { error } => Some(error),
            ServerInfo::Reachable { .. } => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, ServerInfo::Reachable { .. })
    }

    /// Server version, or `"unknown"` when missing or unreachable
    pub fn version_label(&self) -> &str {
        match self {
            ServerInfo::Reachable {
                parse_server_version: Some(version),
                ..
            } => version,
            _ => UNKNOWN_VERSION,
        }
    }

    /// Feature flags reported by the server (empty when unreachable)
    pub fn features(&self) -> Option<&serde_json::Value> {
        match self {
            ServerInfo::Reachable { features, .. } if !features.is_null() => Some(features),
            _ => None,
        }
    }
}

/// 克隆状态，`None`（字段缺失）表示没有克隆任务
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CloneStatus {
    InProgress,
    Failed,
}

/// One registered backend application instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDescriptor {
    pub slug: String,
    pub name: String,
    #[serde(flatten)]
    pub credentials: AppCredentials,
    pub server_info: ServerInfo,
    #[serde(default)]
    pub users: Option<u64>,
    #[serde(default)]
    pub installations: Option<u64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub production: bool,
    #[serde(default)]
    pub clone_status: Option<CloneStatus>,
    #[serde(default)]
    pub clone_progress: Option<u8>,
    pub created_at: DateTime<Utc>,
}

impl AppDescriptor {
    /// Build a new descriptor; the registry may still rename the slug to keep it unique
    pub fn new(name: impl Into<String>, credentials: AppCredentials, server_info: ServerInfo) -> Self {
        let name = name.into();
        Self {
            slug: slugify(&name),
            name,
            credentials,
            server_info,
            users: None,
            installations: None,
            icon: None,
            production: false,
            clone_status: None,
            clone_progress: None,
            created_at: Utc::now(),
        }
    }

    pub fn application_id(&self) -> &str {
        &self.credentials.application_id
    }

    pub fn server_url(&self) -> &str {
        &self.credentials.server_url
    }

    pub fn is_reachable(&self) -> bool {
        self.server_info.is_reachable()
    }

    pub fn is_cloning(&self) -> bool {
        matches!(self.clone_status, Some(CloneStatus::InProgress))
    }

    /// Case-insensitive substring match against the display name
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> AppCredentials {
        AppCredentials::new("http://localhost:1337/parse", "X", "K")
    }

    #[test]
    fn test_server_info_labels() {
        let reachable = ServerInfo::Reachable {
            parse_server_version: Some("2.8.4".to_string()),
            features: serde_json::json!({"schemas": {"addField": true}}),
        };
        assert!(reachable.is_reachable());
        assert_eq!(reachable.version_label(), "2.8.4");
        assert!(reachable.error().is_none());
        assert!(reachable.features().is_some());

        let unreachable = ServerInfo::unreachable("unable to connect to server");
        assert!(!unreachable.is_reachable());
        assert_eq!(unreachable.version_label(), UNKNOWN_VERSION);
        assert_eq!(unreachable.error(), Some("unable to connect to server"));
        assert!(unreachable.features().is_none());
    }

    #[test]
    fn test_descriptor_json_shape() {
        let app = AppDescriptor::new("N", creds(), ServerInfo::unreachable("boom"));
        let json = serde_json::to_value(&app).unwrap();

        assert_eq!(json["slug"], "n");
        assert_eq!(json["serverURL"], "http://localhost:1337/parse");
        assert_eq!(json["applicationId"], "X");
        assert_eq!(json["masterKey"], "K");
        assert_eq!(json["serverInfo"]["status"], "unreachable");
        assert_eq!(json["serverInfo"]["error"], "boom");

        let back: AppDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, app);
    }

    #[test]
    fn test_clone_status_serialization() {
        assert_eq!(CloneStatus::InProgress.as_ref(), "in_progress");
        assert_eq!(
            serde_json::to_string(&CloneStatus::Failed).unwrap(),
            "\"failed\""
        );
    }

    #[test]
    fn test_no_clone_is_only_expressed_by_absence() {
        assert!(serde_json::from_str::<CloneStatus>("\"none\"").is_err());

        let app = AppDescriptor::new("N", creds(), ServerInfo::unreachable("boom"));
        let mut json = serde_json::to_value(&app).unwrap();
        assert!(json["cloneStatus"].is_null());

        json.as_object_mut().unwrap().remove("cloneStatus");
        let back: AppDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back.clone_status, None);
        assert!(!back.is_cloning());
    }
}
