//! Wire types for the deployment-creation endpoint.

use serde::{Deserialize, Serialize};

use sitegen_renderer::RenderedDocument;

/// File name the rendered document is published under.
pub const INDEX_FILE: &str = "index.html";

/// Target environment tag sent with every deployment.
pub const PRODUCTION_TARGET: &str = "production";

/// `{ name, files: [{ file, data }], target }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentPayload {
    pub name: String,
    pub files: Vec<DeploymentFile>,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentFile {
    pub file: String,
    pub data: String,
}

impl DeploymentPayload {
    /// Single-file production deployment of `document`.
    pub fn single_page(project_name: &str, document: &RenderedDocument) -> Self {
        DeploymentPayload {
            name: project_name.to_string(),
            files: vec![DeploymentFile {
                file: INDEX_FILE.to_string(),
                data: document.as_str().to_string(),
            }],
            target: PRODUCTION_TARGET.to_string(),
        }
    }
}

/// The subset of the creation response we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// `my-site.example.com` → `https://my-site.example.com`; URLs that
/// already carry a scheme are kept.
pub fn display_url(reported: &str) -> String {
    let reported = reported.trim();
    if reported.starts_with("https://") || reported.starts_with("http://") {
        reported.to_string()
    } else {
        format!("https://{reported}")
    }
}
