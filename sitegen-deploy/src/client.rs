//! Deployment API client.
//!
//! One `POST` per invocation, no retries, no timeout beyond ureq's
//! defaults. Overlapping calls on clones of the same client are not
//! coordinated; each one races independently.

use sitegen_core::config::DEFAULT_ENDPOINT;
use sitegen_renderer::RenderedDocument;

use crate::error::DeployError;
use crate::payload::{display_url, DeploymentPayload, DeploymentResponse};
use crate::result::{DeployPhase, DeploymentResult};

/// Client for the deployment-creation endpoint.
#[derive(Clone)]
pub struct DeployClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl DeployClient {
    /// Client posting to `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("sitegen/", env!("CARGO_PKG_VERSION")))
            .build();
        DeployClient {
            agent,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Publish `document` as a single-page production deployment of `project_name`.
    ///
    /// Never fails: transport errors, non-2xx statuses and malformed
    /// responses all come back as [`DeploymentResult::Failure`].
    pub fn deploy(
        &self,
        document: &RenderedDocument,
        credential: &str,
        project_name: &str,
    ) -> DeploymentResult {
        self.deploy_observed(document, credential, project_name, |_| {})
    }

    /// [`deploy`](Self::deploy), reporting `InFlight` and then the terminal phase to `on_phase`.
    pub fn deploy_observed<F>(
        &self,
        document: &RenderedDocument,
        credential: &str,
        project_name: &str,
        mut on_phase: F,
    ) -> DeploymentResult
    where
        F: FnMut(&DeployPhase),
    {
        on_phase(&DeployPhase::InFlight);
        let result = match self.submit(document, credential, project_name) {
            Ok(url) => {
                tracing::info!(project = %project_name, url = %url, "deployment created");
                DeploymentResult::Success { url }
            }
            Err(err) => {
                tracing::warn!(project = %project_name, error = %err, "deployment failed");
                DeploymentResult::Failure { reason: err.reason() }
            }
        };
        on_phase(&DeployPhase::from(&result));
        result
    }

    /// Issue the request and return the display URL, keeping the typed error.
    pub fn submit(
        &self,
        document: &RenderedDocument,
        credential: &str,
        project_name: &str,
    ) -> Result<String, DeployError> {
        let payload = DeploymentPayload::single_page(project_name, document);
        tracing::debug!(
            endpoint = %self.endpoint,
            project = %project_name,
            bytes = document.len(),
            "submitting deployment"
        );

        let authorization = bearer(credential);
        let response = match self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &authorization)
            .set("Content-Type", "application/json")
            .send_json(&payload)
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                return Err(DeployError::Api { status, body });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(DeployError::Transport(transport.to_string()));
            }
        };

        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| DeployError::MalformedResponse(format!("unreadable body: {e}")))?;
        if !(200..300).contains(&status) {
            return Err(DeployError::Api { status, body });
        }

        let parsed: DeploymentResponse = serde_json::from_str(&body)
            .map_err(|e| DeployError::MalformedResponse(format!("invalid JSON: {e}")))?;
        match parsed.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                if let Some(id) = parsed.id.as_deref() {
                    tracing::debug!(deployment_id = %id, "deployment id");
                }
                Ok(display_url(url))
            }
            _ => Err(DeployError::MalformedResponse(
                "response has no `url` field".to_string(),
            )),
        }
    }
}

/// `Authorization` value for `credential`, which is forwarded untouched.
/// An empty credential still yields `"Bearer "`; the API decides.
fn bearer(credential: &str) -> String {
    format!("Bearer {credential}")
}

impl Default for DeployClient {
    fn default() -> Self {
        DeployClient::new(DEFAULT_ENDPOINT)
    }
}

/// [`DeployClient::deploy`] against the default endpoint.
pub fn deploy(
    document: &RenderedDocument,
    credential: &str,
    project_name: &str,
) -> DeploymentResult {
    DeployClient::default().deploy(document, credential, project_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> RenderedDocument {
        RenderedDocument::from("<html></html>".to_string())
    }

    #[test]
    fn default_client_targets_default_endpoint() {
        assert_eq!(DeployClient::default().endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn unreachable_endpoint_is_a_failure_not_a_panic() {
        // Port 9 (discard) on loopback is closed on CI machines.
        let client = DeployClient::new("http://127.0.0.1:9/v13/deployments");
        let mut phases = Vec::new();
        let result = client.deploy_observed(&doc(), "t", "p", |p| phases.push(p.clone()));
        assert!(!result.is_success());
        assert!(result.reason().unwrap().contains("could not reach"));
        assert_eq!(phases.len(), 2);
        assert!(phases[0].is_in_flight());
        assert!(phases[1].is_terminal());
    }

    #[test]
    fn invalid_endpoint_is_a_failure() {
        let client = DeployClient::new("not a url");
        let result = client.deploy(&doc(), "t", "p");
        assert!(result.reason().is_some());
    }

    #[test]
    fn credential_is_forwarded_verbatim() {
        assert_eq!(bearer(""), "Bearer ");
        assert_eq!(bearer("tok_123  "), "Bearer tok_123  ");
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<DeployClient>();
    }
}
