//! Descriptor inputs shared by `render`, `preview` and `deploy`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use sitegen_core::{draft, SiteDescriptor, SiteKind};
use sitegen_renderer::{RenderedDocument, SiteRenderer};

/// Where the page content comes from.
///
/// Precedence, lowest first: saved draft (`--draft`) → `--field` pairs →
/// named flags (`--name`, `--bio`, ...).
#[derive(Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Page layout: landing | profile. Defaults to the draft's kind, then landing.
    #[arg(long, short = 'k', value_name = "KIND")]
    pub kind: Option<SiteKind>,

    /// Arbitrary field, repeatable (e.g. `-f phone=555-0100`).
    #[arg(long = "field", short = 'f', value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Landing page name (title and heading).
    #[arg(long)]
    pub name: Option<String>,

    /// Landing page description.
    #[arg(long)]
    pub description: Option<String>,

    /// Landing page background color (e.g. `#f0f0f0` or `red`).
    #[arg(long)]
    pub color: Option<String>,

    /// Profile page title.
    #[arg(long)]
    pub title: Option<String>,

    /// Profile page bio.
    #[arg(long)]
    pub bio: Option<String>,

    /// Profile page theme color.
    #[arg(long = "theme-color", value_name = "COLOR")]
    pub theme_color: Option<String>,

    /// Start from the saved draft (`sitegen draft set ...`).
    #[arg(long)]
    pub draft: bool,

    /// Directory of `.tera` files overriding the built-in templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,
}

fn parse_field(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

impl SiteArgs {
    /// Merge all inputs into a kind and descriptor.
    pub fn resolve(&self, home: &Path) -> Result<(SiteKind, SiteDescriptor)> {
        let mut kind = None;
        let mut descriptor = SiteDescriptor::new();

        if self.draft {
            let saved = draft::load_at(home)
                .context("failed to read saved draft")?
                .context("no saved draft — run `sitegen draft set <field> <value>` first")?;
            kind = Some(saved.kind);
            descriptor = saved.fields;
        }

        for (k, v) in &self.fields {
            descriptor.set(k.as_str(), v.as_str());
        }

        let named = [
            ("name", &self.name),
            ("description", &self.description),
            ("color", &self.color),
            ("title", &self.title),
            ("bio", &self.bio),
            ("themeColor", &self.theme_color),
        ];
        for (field, value) in named {
            if let Some(v) = value {
                descriptor.set(field, v.as_str());
            }
        }

        let kind = self.kind.or(kind).unwrap_or_default();
        Ok((kind, descriptor))
    }

    /// Render with built-in templates, or with overrides from `--templates`.
    pub fn render(&self, kind: SiteKind, descriptor: &SiteDescriptor) -> Result<RenderedDocument> {
        match &self.templates {
            Some(dir) => {
                let renderer = SiteRenderer::with_overrides(dir).with_context(|| {
                    format!("failed to load templates from '{}'", dir.display())
                })?;
                renderer
                    .render(descriptor, kind)
                    .with_context(|| format!("failed to render {kind} page"))
            }
            None => Ok(sitegen_renderer::render(descriptor, kind)),
        }
    }
}

pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("could not determine home directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitegen_core::draft::SiteDraft;
    use tempfile::TempDir;

    #[test]
    fn parse_field_splits_on_first_equals() {
        assert_eq!(
            parse_field("url=https://a.b/?x=1").unwrap(),
            ("url".to_string(), "https://a.b/?x=1".to_string())
        );
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=v").is_err());
    }

    #[test]
    fn named_flags_override_fields_and_draft() {
        let home = TempDir::new().unwrap();
        let saved = SiteDraft::new(
            SiteKind::Profile,
            SiteDescriptor::new().with("title", "draft").with("bio", "kept"),
        );
        draft::save_at(home.path(), &saved).unwrap();

        let args = SiteArgs {
            draft: true,
            fields: vec![("title".into(), "field".into())],
            title: Some("flag".into()),
            ..Default::default()
        };
        let (kind, d) = args.resolve(home.path()).unwrap();
        assert_eq!(kind, SiteKind::Profile);
        assert_eq!(d.get("title"), "flag");
        assert_eq!(d.get("bio"), "kept");
    }

    #[test]
    fn missing_draft_is_an_error() {
        let home = TempDir::new().unwrap();
        let args = SiteArgs { draft: true, ..Default::default() };
        assert!(args.resolve(home.path()).is_err());
    }

    #[test]
    fn explicit_kind_beats_draft_kind() {
        let home = TempDir::new().unwrap();
        draft::save_at(home.path(), &SiteDraft::new(SiteKind::Profile, SiteDescriptor::new()))
            .unwrap();
        let args = SiteArgs {
            draft: true,
            kind: Some(SiteKind::Landing),
            ..Default::default()
        };
        assert_eq!(args.resolve(home.path()).unwrap().0, SiteKind::Landing);
    }
}
