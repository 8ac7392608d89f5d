//! App registration with a reachability probe
//!
//! One `serverInfo` request is issued per registration. Whatever the
//! outcome, the descriptor is committed to the registry; a failed probe only
//! changes what the card displays.

use tracing::{info, warn};

use crate::errors::Result;
use crate::registry::{AppCredentials, AppDescriptor, AppRegistry, ServerInfo};
use crate::transport::{ProbeErrorKind, ServerApi, ServerInfoResponse};

/// User-entered connection details for a new app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationCandidate {
    pub name: String,
    pub credentials: AppCredentials,
}

impl RegistrationCandidate {
    pub fn new(name: impl Into<String>, credentials: AppCredentials) -> Self {
        Self {
            name: name.into(),
            credentials,
        }
    }
}

/// Turn a probe outcome into the snapshot stored on the descriptor
pub fn classify(outcome: std::result::Result<ServerInfoResponse, ProbeErrorKind>) -> ServerInfo {
    match outcome {
        Ok(response) => ServerInfo::Reachable {
            parse_server_version: response.parse_server_version,
            features: response.features,
        },
        Err(kind) => ServerInfo::unreachable(kind.display_message()),
    }
}

/// Probe the candidate's server and build its descriptor
pub async fn probe(api: &dyn ServerApi, candidate: RegistrationCandidate) -> AppDescriptor {
    let outcome = api.server_info(&candidate.credentials).await;
    match &outcome {
        Ok(response) => info!(
            "Server {} reachable (version {})",
            candidate.credentials.server_url,
            response.parse_server_version.as_deref().unwrap_or("unknown")
        ),
        Err(kind) => warn!(
            "Server {} not reachable: {}",
            candidate.credentials.server_url, kind
        ),
    }

    AppDescriptor::new(candidate.name, candidate.credentials, classify(outcome))
}

/// Probe, then hand the descriptor to the registry regardless of the outcome
pub async fn register_app(
    api: &dyn ServerApi,
    registry: &AppRegistry,
    candidate: RegistrationCandidate,
) -> Result<AppDescriptor> {
    let descriptor = probe(api, candidate).await;
    registry.add(descriptor)
}
