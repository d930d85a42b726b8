//! # sitegen-deploy
//!
//! Publishes a rendered page to a third-party deployment API and reports
//! the resulting URL or a human-readable failure reason.
//!
//! ```rust,no_run
//! use sitegen_core::{SiteDescriptor, SiteKind};
//! use sitegen_deploy::{DeployClient, DeploymentResult};
//!
//! let doc = sitegen_renderer::render(&SiteDescriptor::new().with("name", "Hi"), SiteKind::Landing);
//! let token = std::env::var("SITEGEN_TOKEN").unwrap_or_default();
//! match DeployClient::default().deploy(&doc, &token, "my-site") {
//!     DeploymentResult::Success { url } => println!("live at {url}"),
//!     DeploymentResult::Failure { reason } => eprintln!("Deployment failed: {reason}"),
//! }
//! ```

pub mod client;
pub mod error;
pub mod payload;
pub mod result;

pub use client::{deploy, DeployClient};
pub use error::DeployError;
pub use payload::{DeploymentFile, DeploymentPayload, INDEX_FILE, PRODUCTION_TARGET};
pub use result::{DeployPhase, DeploymentResult};
