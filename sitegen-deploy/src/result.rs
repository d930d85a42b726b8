//! Deployment outcome and per-invocation phase.

use std::fmt;

use serde::Serialize;

/// Outcome of one deploy invocation. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeploymentResult {
    /// `url` is ready to display (`https://` prefixed).
    Success { url: String },
    /// `reason` is a short human-readable message, never a raw error dump.
    Failure { reason: String },
}

impl DeploymentResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DeploymentResult::Success { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            DeploymentResult::Success { url } => Some(url),
            DeploymentResult::Failure { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            DeploymentResult::Success { .. } => None,
            DeploymentResult::Failure { reason } => Some(reason),
        }
    }
}

/// `Idle → InFlight → {Succeeded | Failed}`. Terminal phases have no
/// outgoing transition; a new deploy starts a new invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeployPhase {
    #[default]
    Idle,
    InFlight,
    Succeeded { url: String },
    Failed { reason: String },
}

impl DeployPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeployPhase::Succeeded { .. } | DeployPhase::Failed { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, DeployPhase::InFlight)
    }
}

impl From<&DeploymentResult> for DeployPhase {
    fn from(result: &DeploymentResult) -> Self {
        match result {
            DeploymentResult::Success { url } => DeployPhase::Succeeded { url: url.clone() },
            DeploymentResult::Failure { reason } => DeployPhase::Failed { reason: reason.clone() },
        }
    }
}

impl fmt::Display for DeployPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployPhase::Idle => write!(f, "idle"),
            DeployPhase::InFlight => write!(f, "in flight"),
            DeployPhase::Succeeded { .. } => write!(f, "succeeded"),
            DeployPhase::Failed { .. } => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases() {
        assert!(!DeployPhase::Idle.is_terminal());
        assert!(!DeployPhase::InFlight.is_terminal());
        assert!(DeployPhase::Succeeded { url: "u".into() }.is_terminal());
        assert!(DeployPhase::Failed { reason: "r".into() }.is_terminal());
    }

    #[test]
    fn phase_from_result() {
        let ok = DeploymentResult::Success { url: "https://a".into() };
        assert_eq!(DeployPhase::from(&ok), DeployPhase::Succeeded { url: "https://a".into() });
        let bad = DeploymentResult::Failure { reason: "nope".into() };
        assert_eq!(DeployPhase::from(&bad).to_string(), "failed");
    }

    #[test]
    fn result_json_is_tagged() {
        let ok = DeploymentResult::Success { url: "https://a".into() };
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"status":"success","url":"https://a"}"#
        );
    }
}
