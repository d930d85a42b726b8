//! Deployment configuration.
//!
//! Resolution order, lowest to highest precedence:
//!
//! 1. built-in defaults
//! 2. `<home>/.sitegen/config.yaml`
//! 3. environment (`SITEGEN_DEPLOY_ENDPOINT`, `SITEGEN_PROJECT`, `SITEGEN_TOKEN`)
//!
//! Command-line flags are layered on top by the caller via [`DeployConfig::overlay`].

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::draft::home;
use crate::error::CoreError;

pub const DEFAULT_ENDPOINT: &str = "https://api.vercel.com/v13/deployments";

pub const ENV_ENDPOINT: &str = "SITEGEN_DEPLOY_ENDPOINT";
pub const ENV_PROJECT: &str = "SITEGEN_PROJECT";
pub const ENV_TOKEN: &str = "SITEGEN_TOKEN";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for DeployConfig {
    fn default() -> Self {
        DeployConfig {
            endpoint: default_endpoint(),
            project_name: None,
            token: None,
        }
    }
}

// Token stays out of logs and panic messages.
impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployConfig")
            .field("endpoint", &self.endpoint)
            .field("project_name", &self.project_name)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl DeployConfig {
    /// Apply every `Some` in the arguments over the current values.
    pub fn overlay(
        mut self,
        endpoint: Option<String>,
        project_name: Option<String>,
        token: Option<String>,
    ) -> Self {
        if let Some(e) = endpoint {
            self.endpoint = e;
        }
        if project_name.is_some() {
            self.project_name = project_name;
        }
        if token.is_some() {
            self.token = token;
        }
        self
    }

    /// Overlay values from an environment lookup function.
    pub fn with_env<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.overlay(lookup(ENV_ENDPOINT), lookup(ENV_PROJECT), lookup(ENV_TOKEN))
    }
}

/// `<home>/.sitegen/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".sitegen").join("config.yaml")
}

/// Read the config file only. A missing file yields defaults.
pub fn load_file_at(home: &Path) -> Result<DeployConfig, CoreError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(DeployConfig::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    if contents.trim().is_empty() {
        return Ok(DeployConfig::default());
    }
    serde_yaml::from_str(&contents).map_err(|e| CoreError::Parse { path, source: e })
}

/// Config file plus process environment.
pub fn load_at(home: &Path) -> Result<DeployConfig, CoreError> {
    Ok(load_file_at(home)?.with_env(|k| std::env::var(k).ok()))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<DeployConfig, CoreError> {
    load_at(&home()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn write_config(home: &Path, body: &str) {
        let path = config_path_at(home);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    #[test]
    fn missing_file_gives_defaults() {
        let home = TempDir::new().unwrap();
        let cfg = load_file_at(home.path()).unwrap();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert!(cfg.token.is_none());
    }

    #[test]
    fn file_values_are_read() {
        let home = TempDir::new().unwrap();
        write_config(home.path(), "project_name: my-site\ntoken: abc\n");
        let cfg = load_file_at(home.path()).unwrap();
        assert_eq!(cfg.project_name.as_deref(), Some("my-site"));
        assert_eq!(cfg.token.as_deref(), Some("abc"));
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn env_overrides_file() {
        let home = TempDir::new().unwrap();
        write_config(home.path(), "project_name: from-file\n");
        let env: HashMap<&str, &str> = [(ENV_PROJECT, "from-env"), (ENV_TOKEN, "t0k")].into();
        let cfg = load_file_at(home.path())
            .unwrap()
            .with_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.project_name.as_deref(), Some("from-env"));
        assert_eq!(cfg.token.as_deref(), Some("t0k"));
    }

    #[test]
    fn overlay_keeps_unset_values() {
        let cfg = DeployConfig::default().overlay(None, Some("p".into()), None);
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.project_name.as_deref(), Some("p"));
    }

    #[test]
    fn malformed_file_reports_path() {
        let home = TempDir::new().unwrap();
        write_config(home.path(), "- not\n- a mapping\n");
        let err = load_file_at(home.path()).unwrap_err();
        assert!(matches!(err, CoreError::Parse { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn debug_redacts_token() {
        let cfg = DeployConfig::default().overlay(None, None, Some("super-secret".into()));
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
