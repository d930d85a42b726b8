//! `sitegen deploy` — render and publish the page.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;

use sitegen_core::config;
use sitegen_deploy::{DeployClient, DeployPhase, DeploymentResult};

use super::site::{home_dir, SiteArgs};

/// Arguments for `sitegen deploy`.
#[derive(Args, Debug)]
pub struct DeployArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Deployment project name. Falls back to `SITEGEN_PROJECT` / config file.
    #[arg(long, short = 'p')]
    pub project: Option<String>,

    /// Bearer token. Prefer `SITEGEN_TOKEN` so it stays out of shell history.
    #[arg(long)]
    pub token: Option<String>,

    /// Deployment-creation endpoint. Falls back to `SITEGEN_DEPLOY_ENDPOINT` / config file.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Emit the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl DeployArgs {
    pub fn run(self) -> Result<()> {
        let home = home_dir()?;
        let cfg = config::load_at(&home)
            .context("failed to load ~/.sitegen/config.yaml")?
            .overlay(self.endpoint.clone(), self.project.clone(), self.token.clone());
        tracing::debug!(config = ?cfg, "resolved deploy config");

        let project = cfg
            .project_name
            .clone()
            .filter(|p| !p.trim().is_empty())
            .context("no project name — pass --project or set SITEGEN_PROJECT")?;
        let token = cfg.token.clone().unwrap_or_default();
        if token.is_empty() {
            tracing::warn!("no deploy token configured; sending request without credentials");
        }

        let (kind, descriptor) = self.site.resolve(&home)?;
        let doc = self.site.render(kind, &descriptor)?;

        let client = DeployClient::new(cfg.endpoint);
        let json = self.json;
        let result = client.deploy_observed(&doc, &token, &project, |phase| {
            if !json && matches!(phase, DeployPhase::InFlight) {
                eprintln!("Deploying '{project}'...");
            }
        });

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        match result {
            DeploymentResult::Success { url } => {
                if !self.json {
                    println!("{} Deployed: {}", "✓".green(), url.bold());
                }
                Ok(())
            }
            DeploymentResult::Failure { reason } => {
                if !self.json {
                    eprintln!("{} {}", "✗".red(), "Deployment Failed".red().bold());
                }
                Err(anyhow!(reason))
            }
        }
    }
}
