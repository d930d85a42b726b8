//! Error types for sitegen-deploy.

use thiserror::Error;

/// Everything that can go wrong between submitting a payload and reading
/// back a deployment URL. Converted to [`DeploymentResult::Failure`] at the
/// client boundary; callers of [`DeployClient::deploy`] never see it.
///
/// [`DeploymentResult::Failure`]: crate::DeploymentResult::Failure
/// [`DeployClient::deploy`]: crate::DeployClient::deploy
#[derive(Debug, Error)]
pub enum DeployError {
    /// Network unreachable, DNS failure, connection reset, transport timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx response. Body kept for diagnostics.
    #[error("deployment API returned HTTP {status}")]
    Api { status: u16, body: String },

    /// 2xx response without a usable `url`.
    #[error("malformed deployment response: {0}")]
    MalformedResponse(String),
}

const MAX_BODY_IN_REASON: usize = 200;

impl DeployError {
    /// Short human-readable reason suitable for showing to a user.
    pub fn reason(&self) -> String {
        match self {
            DeployError::Transport(msg) => format!("could not reach the deployment API: {msg}"),
            DeployError::Api { status, body } => {
                let detail = api_message(body);
                let head = match status {
                    401 | 403 => format!(
                        "authorization rejected by the deployment API (HTTP {status}); check the deploy token"
                    ),
                    404 => format!("deployment endpoint not found (HTTP {status})"),
                    429 => format!("rate limited by the deployment API (HTTP {status})"),
                    s if *s >= 500 => format!("deployment API server error (HTTP {status})"),
                    _ => format!("deployment API rejected the request (HTTP {status})"),
                };
                match detail {
                    Some(d) => format!("{head}: {d}"),
                    None => head,
                }
            }
            DeployError::MalformedResponse(msg) => {
                format!("unexpected response from the deployment API: {msg}")
            }
        }
    }
}

/// Pull `error.message` (or a top-level `message`) out of a JSON error body,
/// falling back to the raw body, truncated.
fn api_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        let msg = value
            .pointer("/error/message")
            .or_else(|| value.get("message"))
            .and_then(|m| m.as_str());
        if let Some(m) = msg {
            return Some(m.to_string());
        }
    }
    Some(truncate(trimmed, MAX_BODY_IN_REASON))
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_mentions_authorization() {
        let err = DeployError::Api { status: 401, body: String::new() };
        assert!(err.reason().contains("authorization"));
        assert!(err.reason().contains("401"));
    }

    #[test]
    fn api_error_message_is_extracted() {
        let err = DeployError::Api {
            status: 403,
            body: r#"{"error":{"code":"forbidden","message":"Not authorized"}}"#.to_string(),
        };
        assert!(err.reason().ends_with(": Not authorized"));
    }

    #[test]
    fn long_plain_body_is_truncated() {
        let err = DeployError::Api { status: 500, body: "x".repeat(1000) };
        let reason = err.reason();
        assert!(reason.contains("server error"));
        assert!(reason.chars().count() < 300);
        assert!(reason.ends_with('…'));
    }

    #[test]
    fn display_keeps_status() {
        let err = DeployError::Api { status: 422, body: "{}".into() };
        assert_eq!(err.to_string(), "deployment API returned HTTP 422");
    }
}
