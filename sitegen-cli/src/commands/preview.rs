//! `sitegen preview` — write a host page showing the site in a sandboxed frame.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::site::{home_dir, SiteArgs};

/// Arguments for `sitegen preview`.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Preview page to write.
    #[arg(long, short = 'o', value_name = "FILE", default_value = "sitegen-preview.html")]
    pub out: PathBuf,
}

impl PreviewArgs {
    pub fn run(self) -> Result<()> {
        let home = home_dir()?;
        let (kind, descriptor) = self.site.resolve(&home)?;
        let doc = self.site.render(kind, &descriptor)?;
        let page = sitegen_renderer::preview_page(&doc);

        std::fs::write(&self.out, page)
            .with_context(|| format!("failed to write '{}'", self.out.display()))?;
        println!("✓ Preview written to {}", self.out.display());
        println!("  Open it in a browser; the site runs sandboxed with scripts disabled.");
        Ok(())
    }
}
