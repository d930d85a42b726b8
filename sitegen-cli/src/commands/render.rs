//! `sitegen render` — print or write the generated HTML document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::site::{home_dir, SiteArgs};

/// Arguments for `sitegen render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Write to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let home = home_dir()?;
        let (kind, descriptor) = self.site.resolve(&home)?;
        let doc = self.site.render(kind, &descriptor)?;

        match self.out {
            Some(path) => {
                std::fs::write(&path, doc.as_str())
                    .with_context(|| format!("failed to write '{}'", path.display()))?;
                println!("✓ Rendered {kind} page to {} ({} bytes)", path.display(), doc.len());
            }
            None => print!("{doc}"),
        }
        Ok(())
    }
}
