//! Transport to remote Parse Servers
//!
//! `ServerApi` is the seam between the dashboard and the network. Failures
//! are reported as an enumerated [`ProbeErrorKind`]; only the HTTP
//! implementation knows about Parse's numeric wire codes.

mod parse_http;

pub use parse_http::ParseHttpApi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::registry::AppCredentials;

/// Parse `CONNECTION_FAILED`
pub const PARSE_CONNECTION_FAILED: i64 = 100;
/// Parse `INVALID_JSON`, what servers older than the `serverInfo` endpoint answer with
pub const PARSE_INVALID_JSON: i64 = 107;

/// Why a request to a Parse Server failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeErrorKind {
    /// The server could not be reached at all
    ConnectionFailed,
    /// The server answered, but does not understand the request
    VersionTooLow,
    /// Anything else, with the server's message when it sent one
    Other(Option<String>),
}

impl ProbeErrorKind {
    /// Map a Parse error code and message to a kind
    pub fn from_parse_code(code: i64, message: Option<String>) -> Self {
        match code {
            PARSE_CONNECTION_FAILED => ProbeErrorKind::ConnectionFailed,
            PARSE_INVALID_JSON => ProbeErrorKind::VersionTooLow,
            _ => ProbeErrorKind::Other(message.filter(|m| !m.is_empty())),
        }
    }

    /// Text shown on the app card
    pub fn display_message(&self) -> String {
        match self {
            ProbeErrorKind::ConnectionFailed => "unable to connect to server".to_string(),
            ProbeErrorKind::VersionTooLow => "server version too low".to_string(),
            ProbeErrorKind::Other(Some(message)) => message.clone(),
            ProbeErrorKind::Other(None) => "unknown error".to_string(),
        }
    }
}

impl std::fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_message())
    }
}

impl std::error::Error for ProbeErrorKind {}

/// Body of a successful `GET /serverInfo`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfoResponse {
    #[serde(default)]
    pub parse_server_version: Option<String>,
    #[serde(default)]
    pub features: serde_json::Value,
}

/// One entry of the clone progress feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneProgress {
    pub app_id: String,
    pub progress: u8,
}

/// Read-only operations the dashboard performs against remote servers
#[async_trait]
pub trait ServerApi: Send + Sync {
    /// Diagnostic probe: server version and feature flags
    async fn server_info(
        &self,
        credentials: &AppCredentials,
    ) -> Result<ServerInfoResponse, ProbeErrorKind>;

    /// Number of objects in `class_name`
    async fn class_count(
        &self,
        credentials: &AppCredentials,
        class_name: &str,
    ) -> Result<u64, ProbeErrorKind>;

    /// Latest clone progress for the given application ids
    async fn clone_progress(&self, app_ids: &[String]) -> Result<Vec<CloneProgress>, ProbeErrorKind>;

    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parse_code() {
        assert_eq!(
            ProbeErrorKind::from_parse_code(100, Some("XMLHttpRequest failed".into())),
            ProbeErrorKind::ConnectionFailed
        );
        assert_eq!(
            ProbeErrorKind::from_parse_code(107, None),
            ProbeErrorKind::VersionTooLow
        );
        assert_eq!(
            ProbeErrorKind::from_parse_code(119, Some("forbidden".into())),
            ProbeErrorKind::Other(Some("forbidden".into()))
        );
        assert_eq!(
            ProbeErrorKind::from_parse_code(1, Some(String::new())),
            ProbeErrorKind::Other(None)
        );
    }

    #[test]
    fn test_display_message() {
        assert_eq!(
            ProbeErrorKind::ConnectionFailed.display_message(),
            "unable to connect to server"
        );
        assert_eq!(
            ProbeErrorKind::VersionTooLow.display_message(),
            "server version too low"
        );
        assert_eq!(ProbeErrorKind::Other(None).display_message(), "unknown error");
        assert_eq!(
            ProbeErrorKind::Other(Some("unauthorized".into())).to_string(),
            "unauthorized"
        );
    }

    #[test]
    fn test_server_info_response_parsing() {
        let body = r#"{"parseServerVersion":"2.8.4","features":{"globalConfig":{"create":true}}}"#;
        let parsed: ServerInfoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.parse_server_version.as_deref(), Some("2.8.4"));
        assert_eq!(parsed.features["globalConfig"]["create"], true);

        let empty: ServerInfoResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.parse_server_version.is_none());
        assert!(empty.features.is_null());
    }
}
