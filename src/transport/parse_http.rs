//! Parse REST API over ureq
//!
//! ureq is blocking, so every request runs inside `spawn_blocking`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace, warn};
use ureq::Agent;
use url::Url;

use super::{
    CloneProgress, PARSE_CONNECTION_FAILED, PARSE_INVALID_JSON, ProbeErrorKind, ServerApi,
    ServerInfoResponse,
};
use crate::config::StaticConfig;
use crate::registry::AppCredentials;

const HEADER_APPLICATION_ID: &str = "X-Parse-Application-Id";
const HEADER_MASTER_KEY: &str = "X-Parse-Master-Key";

/// HTTP implementation of [`ServerApi`] for Parse Server
#[derive(Clone)]
pub struct ParseHttpApi {
    agent: Agent,
    server_info_path: String,
    progress_source: Option<String>,
}

impl ParseHttpApi {
    pub fn new(
        timeout: Duration,
        server_info_path: impl Into<String>,
        progress_source: Option<String>,
    ) -> Self {
        // Non-2xx answers carry a Parse error body we want to read
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            server_info_path: server_info_path.into(),
            progress_source,
        }
    }

    pub fn from_config(config: &StaticConfig) -> Self {
        Self::new(
            Duration::from_secs(config.probe.timeout_secs),
            config.probe.server_info_path.clone(),
            config.progress.source_url.clone(),
        )
    }

    /// Resolve `path` relative to the app's server URL
    pub fn endpoint(server_url: &str, path: &str) -> Result<Url, ProbeErrorKind> {
        let base = if server_url.ends_with('/') {
            server_url.to_string()
        } else {
            format!("{}/", server_url)
        };
        Url::parse(&base)
            .and_then(|base| base.join(path.trim_start_matches('/')))
            .map_err(|e| ProbeErrorKind::Other(Some(format!("invalid server URL: {}", e))))
    }

    fn get_json_sync(
        agent: &Agent,
        credentials: Option<&AppCredentials>,
        url: &Url,
    ) -> Result<Value, ProbeErrorKind> {
        let mut request = agent.get(url.as_str());
        if let Some(credentials) = credentials {
            request = request
                .header(HEADER_APPLICATION_ID, credentials.application_id.as_str())
                .header(HEADER_MASTER_KEY, credentials.master_key.as_str());
        }

        let response = request.call().map_err(map_ureq_error)?;
        let status = response.status();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(map_ureq_error)?;
        trace!("GET {} -> {} ({} bytes)", url, status, body.len());

        let json: Value = serde_json::from_str(&body)
            .map_err(|_| ProbeErrorKind::from_parse_code(PARSE_INVALID_JSON, None))?;

        let message = json
            .get("error")
            .and_then(Value::as_str)
            .map(String::from);
        if let Some(code) = json.get("code").and_then(Value::as_i64) {
            return Err(ProbeErrorKind::from_parse_code(code, message));
        }
        if !status.is_success() {
            // e.g. a wrong master key: 403 {"error":"unauthorized"}
            let message = message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("server responded with HTTP {}", status.as_u16()));
            return Err(ProbeErrorKind::Other(Some(message)));
        }

        Ok(json)
    }

    async fn get_json(
        &self,
        credentials: Option<AppCredentials>,
        url: Url,
    ) -> Result<Value, ProbeErrorKind> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || Self::get_json_sync(&agent, credentials.as_ref(), &url))
            .await
            .unwrap_or_else(|e| {
                warn!("HTTP spawn_blocking failed: {}", e);
                Err(ProbeErrorKind::Other(Some(e.to_string())))
            })
    }
}

/// Transport-level failures all mean the server was never reached
fn map_ureq_error(err: ureq::Error) -> ProbeErrorKind {
    match err {
        ureq::Error::Io(_)
        | ureq::Error::Timeout(_)
        | ureq::Error::HostNotFound
        | ureq::Error::ConnectionFailed => {
            ProbeErrorKind::from_parse_code(PARSE_CONNECTION_FAILED, Some(err.to_string()))
        }
        other => ProbeErrorKind::Other(Some(other.to_string())),
    }
}

#[async_trait]
impl ServerApi for ParseHttpApi {
    async fn server_info(
        &self,
        credentials: &AppCredentials,
    ) -> Result<ServerInfoResponse, ProbeErrorKind> {
        let url = Self::endpoint(&credentials.server_url, &self.server_info_path)?;
        debug!("Probing {}", url);
        let json = self.get_json(Some(credentials.clone()), url).await?;
        serde_json::from_value(json).map_err(|e| ProbeErrorKind::Other(Some(e.to_string())))
    }

    async fn class_count(
        &self,
        credentials: &AppCredentials,
        class_name: &str,
    ) -> Result<u64, ProbeErrorKind> {
        let mut url = Self::endpoint(&credentials.server_url, &format!("classes/{}", class_name))?;
        url.query_pairs_mut()
            .append_pair("count", "1")
            .append_pair("limit", "0");

        let json = self.get_json(Some(credentials.clone()), url).await?;
        json.get("count")
            .and_then(Value::as_u64)
            .ok_or_else(|| ProbeErrorKind::Other(Some("count missing from response".to_string())))
    }

    async fn clone_progress(&self, app_ids: &[String]) -> Result<Vec<CloneProgress>, ProbeErrorKind> {
        let Some(source) = &self.progress_source else {
            return Ok(Vec::new());
        };
        let url = Url::parse(source)
            .map_err(|e| ProbeErrorKind::Other(Some(format!("invalid progress URL: {}", e))))?;

        let json = self.get_json(None, url).await?;
        let entries: Vec<CloneProgress> =
            serde_json::from_value(json).map_err(|e| ProbeErrorKind::Other(Some(e.to_string())))?;

        Ok(entries
            .into_iter()
            .filter(|entry| app_ids.contains(&entry.app_id))
            .collect())
    }

    fn name(&self) -> &'static str {
        "ParseHttp"
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;

    use super::*;

    /// One-shot HTTP server on loopback; returns the Parse mount URL and the raw request
    fn serve_once(status: &str, content_type: &str, body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
        });

        (format!("http://{}/parse", addr), rx)
    }

    async fn server_info_with(status: &str, body: &str) -> Result<ServerInfoResponse, ProbeErrorKind> {
        let (url, _rx) = serve_once(status, "application/json", body);
        let api = ParseHttpApi::new(Duration::from_secs(5), "serverInfo", None);
        api.server_info(&AppCredentials::new(url, "X", "K")).await
    }

    #[test]
    fn test_endpoint_joins_relative_to_mount_path() {
        let url = ParseHttpApi::endpoint("http://localhost:1337/parse", "serverInfo").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1337/parse/serverInfo");

        let url = ParseHttpApi::endpoint("http://localhost:1337/parse/", "/serverInfo").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1337/parse/serverInfo");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        let err = ParseHttpApi::endpoint("not a url", "serverInfo").unwrap_err();
        match err {
            ProbeErrorKind::Other(Some(msg)) => assert!(msg.starts_with("invalid server URL")),
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    /// Nothing listens on port 9 of the loopback interface
    #[tokio::test]
    async fn test_refused_connection_is_connection_failed() {
        let api = ParseHttpApi::new(Duration::from_secs(2), "serverInfo", None);
        let credentials = AppCredentials::new("http://127.0.0.1:9/parse", "X", "K");

        let err = api.server_info(&credentials).await.unwrap_err();
        assert_eq!(err, ProbeErrorKind::ConnectionFailed);
    }

    #[tokio::test]
    async fn test_progress_without_source_is_empty() {
        let api = ParseHttpApi::new(Duration::from_secs(1), "serverInfo", None);
        let progress = api.clone_progress(&["X".to_string()]).await.unwrap();
        assert!(progress.is_empty());
    }

    #[tokio::test]
    async fn test_server_info_success_sends_credentials() {
        let (url, rx) = serve_once(
            "200 OK",
            "application/json",
            r#"{"parseServerVersion":"5.2.1","features":{"hooks":{"create":true}}}"#,
        );
        let api = ParseHttpApi::new(Duration::from_secs(5), "serverInfo", None);

        let info = api
            .server_info(&AppCredentials::new(url, "X", "K"))
            .await
            .unwrap();
        assert_eq!(info.parse_server_version.as_deref(), Some("5.2.1"));
        assert_eq!(info.features["hooks"]["create"], true);

        let request = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(request.starts_with("GET /parse/serverInfo "));
        let request = request.to_lowercase();
        assert!(request.contains("x-parse-application-id: x"));
        assert!(request.contains("x-parse-master-key: k"));
    }

    #[tokio::test]
    async fn test_error_without_code_keeps_server_message() {
        let err = server_info_with("403 Forbidden", r#"{"error":"unauthorized"}"#)
            .await
            .unwrap_err();
        assert_eq!(err, ProbeErrorKind::Other(Some("unauthorized".to_string())));
        assert_eq!(err.display_message(), "unauthorized");
    }

    #[tokio::test]
    async fn test_error_body_without_message_reports_status() {
        let err = server_info_with("502 Bad Gateway", "{}").await.unwrap_err();
        assert_eq!(
            err,
            ProbeErrorKind::Other(Some("server responded with HTTP 502".to_string()))
        );
    }

    #[tokio::test]
    async fn test_code_100_is_connection_failed() {
        let err = server_info_with(
            "400 Bad Request",
            r#"{"code":100,"error":"XMLHttpRequest failed"}"#,
        )
        .await
        .unwrap_err();
        assert_eq!(err, ProbeErrorKind::ConnectionFailed);
        assert_eq!(err.display_message(), "unable to connect to server");
    }

    #[tokio::test]
    async fn test_code_107_is_version_too_low() {
        let err = server_info_with("400 Bad Request", r#"{"code":107,"error":"invalid json"}"#)
            .await
            .unwrap_err();
        assert_eq!(err, ProbeErrorKind::VersionTooLow);
    }

    #[tokio::test]
    async fn test_non_json_body_is_version_too_low() {
        let (url, _rx) = serve_once("404 Not Found", "text/html", "<html>Cannot GET</html>");
        let api = ParseHttpApi::new(Duration::from_secs(5), "serverInfo", None);

        let err = api
            .server_info(&AppCredentials::new(url, "X", "K"))
            .await
            .unwrap_err();
        assert_eq!(err, ProbeErrorKind::VersionTooLow);
        assert_eq!(err.display_message(), "server version too low");
    }

    #[tokio::test]
    async fn test_other_code_with_empty_message_is_unknown_error() {
        let err = server_info_with("400 Bad Request", r#"{"code":141,"error":""}"#)
            .await
            .unwrap_err();
        assert_eq!(err, ProbeErrorKind::Other(None));
        assert_eq!(err.display_message(), "unknown error");

        let err = server_info_with("400 Bad Request", r#"{"code":141,"error":"script failed"}"#)
            .await
            .unwrap_err();
        assert_eq!(err.display_message(), "script failed");
    }

    #[tokio::test]
    async fn test_class_count_reads_count() {
        let (url, rx) = serve_once("200 OK", "application/json", r#"{"results":[],"count":42}"#);
        let api = ParseHttpApi::new(Duration::from_secs(5), "serverInfo", None);

        let count = api
            .class_count(&AppCredentials::new(url, "X", "K"), "_User")
            .await
            .unwrap();
        assert_eq!(count, 42);

        let request = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(request.starts_with("GET /parse/classes/_User?count=1&limit=0 "));
    }
}
