//! Probe executor: one outbound check of one platform for one username.

use crate::error::Result;
use async_trait::async_trait;
use namesweep_catalog::{PlatformDescriptor, PLACEHOLDER};
use namesweep_core::{AppConfig, FoundAccount, Username};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Result of checking one platform.
///
/// Only `Found` outcomes are retained in the session's result set. `Absent`
/// (a clean negative response) and `Failed` (a transport-level failure) are
/// treated identically by the orchestrator; the distinction exists for
/// observability only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The platform responded positively; the account exists
    Found(FoundAccount),
    /// The platform responded, but the account does not exist
    Absent,
    /// The probe itself failed (network error, timeout)
    Failed(String),
}

impl ProbeOutcome {
    /// Whether this outcome is a positive hit.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// A single-attempt check of one platform for one username.
///
/// The orchestrator is generic over this seam so tests can script outcomes
/// without touching the network.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe one platform. Never fails at the `Result` level: transport
    /// errors are folded into [`ProbeOutcome::Failed`].
    async fn probe(&self, descriptor: &PlatformDescriptor, username: &Username) -> ProbeOutcome;
}

/// Build the target profile URL by substituting the first placeholder
/// occurrence with the username.
///
/// The username is spliced in textually, with no escaping: platform profile
/// URLs treat it as a path segment. A template without a placeholder is
/// permitted (unchecked input) and yields the raw template.
#[must_use]
pub fn build_profile_url(template: &str, username: &Username) -> String {
    if !template.contains(PLACEHOLDER) {
        debug!(template = %template, "url template has no placeholder, probing raw template");
        return template.to_string();
    }

    template.replacen(PLACEHOLDER, username.as_str(), 1)
}

/// Build the relay request URL: the relay endpoint with the percent-encoded
/// target URL appended as the query string.
#[must_use]
pub fn build_relay_url(relay_url: &str, target: &str) -> String {
    format!("{relay_url}{}", urlencoding::encode(target))
}

/// Whether an HTTP status counts as a positive hit.
///
/// Mirrors the reference classification: a success status that is not 404.
/// Redirects are followed by the client, so only the final status is seen.
#[must_use]
pub fn is_positive_status(status: StatusCode) -> bool {
    status.is_success() && status != StatusCode::NOT_FOUND
}

/// Probe executor that relays requests through the configured CORS proxy.
///
/// Issues exactly one GET per platform per scan, follows redirects
/// transparently, and never retries.
pub struct ProbeExecutor {
    client: reqwest::Client,
    relay_url: String,
}

impl ProbeExecutor {
    /// Create a new executor from the scanning configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.scanning.probe_timeout_secs))
            .user_agent(config.scanning.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            relay_url: config.scanning.relay_url.clone(),
        })
    }
}

#[async_trait]
impl Prober for ProbeExecutor {
    async fn probe(&self, descriptor: &PlatformDescriptor, username: &Username) -> ProbeOutcome {
        let target = build_profile_url(&descriptor.url_template, username);
        let relay = build_relay_url(&self.relay_url, &target);

        match self.client.get(&relay).send().await {
            Ok(response) => {
                let status = response.status();
                if is_positive_status(status) {
                    ProbeOutcome::Found(FoundAccount {
                        name: descriptor.name.clone(),
                        url: target,
                    })
                } else {
                    debug!(platform = %descriptor.name, status = %status, "negative response");
                    ProbeOutcome::Absent
                }
            }
            Err(e) => ProbeOutcome::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username(s: &str) -> Username {
        Username::new(s).expect("valid username")
    }

    #[test]
    fn test_build_profile_url() {
        let url = build_profile_url("https://github.com/{}", &username("alice"));
        assert_eq!(url, "https://github.com/alice");
    }

    #[test]
    fn test_build_profile_url_first_occurrence_only() {
        let url = build_profile_url("https://example.com/{}/posts/{}", &username("alice"));
        assert_eq!(url, "https://example.com/alice/posts/{}");
    }

    #[test]
    fn test_build_profile_url_no_placeholder() {
        // Permissive: a malformed template probes the raw template URL.
        let url = build_profile_url("https://example.com/profile", &username("alice"));
        assert_eq!(url, "https://example.com/profile");
    }

    #[test]
    fn test_build_relay_url_encodes_target() {
        let relay = build_relay_url("https://corsproxy.io/?", "https://github.com/alice");
        assert_eq!(
            relay,
            "https://corsproxy.io/?https%3A%2F%2Fgithub.com%2Falice"
        );
    }

    #[test]
    fn test_positive_status_classification() {
        assert!(is_positive_status(StatusCode::OK));
        assert!(is_positive_status(StatusCode::CREATED));
        assert!(is_positive_status(StatusCode::NO_CONTENT));

        assert!(!is_positive_status(StatusCode::NOT_FOUND));
        assert!(!is_positive_status(StatusCode::MOVED_PERMANENTLY));
        assert!(!is_positive_status(StatusCode::FORBIDDEN));
        assert!(!is_positive_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_positive_status(StatusCode::TOO_MANY_REQUESTS));
    }

    #[test]
    fn test_executor_construction() {
        let executor = ProbeExecutor::new(&AppConfig::default());
        assert!(executor.is_ok());
    }

    #[test]
    fn test_outcome_is_found() {
        let account = FoundAccount {
            name: namesweep_core::PlatformName::new("GitHub").expect("valid name"),
            url: "https://github.com/alice".to_string(),
        };

        assert!(ProbeOutcome::Found(account).is_found());
        assert!(!ProbeOutcome::Absent.is_found());
        assert!(!ProbeOutcome::Failed("timeout".to_string()).is_found());
    }
}
