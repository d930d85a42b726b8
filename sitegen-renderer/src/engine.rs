//! Tera rendering engine — [`TemplateEngine`] and [`SiteRenderer`].
//!
//! # Template names
//!
//! | Template             | Used for                                 |
//! |----------------------|------------------------------------------|
//! | `site/_base.html`    | shared head, style and extra fields      |
//! | `site/landing.html`  | [`SiteKind::Landing`]                    |
//! | `site/profile.html`  | [`SiteKind::Profile`]                    |
//! | `preview/host.html`  | sandboxed preview page                   |
//!
//! Every name ends in `.html`, so tera autoescapes all `{{ … }}` output.
//! The theme color lands inside `<style>`, where entities are not decoded;
//! it goes through the `css_value` filter instead.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::{Tera, Value};

use sitegen_core::types::{SiteDescriptor, SiteKind};

use crate::context::SiteContext;
use crate::document::RenderedDocument;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

pub(crate) const PREVIEW_TEMPLATE: &str = "preview/host.html";

const TPLS: &[(&str, &str)] = &[
    ("site/_base.html", include_str!("templates/_partials/base.html.tera")),
    ("site/landing.html", include_str!("templates/landing.html.tera")),
    ("site/profile.html", include_str!("templates/profile.html.tera")),
    (PREVIEW_TEMPLATE, include_str!("templates/preview.html.tera")),
];

// ---------------------------------------------------------------------------
// CSS value escaping
// ---------------------------------------------------------------------------

/// CSS functions that compute a color or gradient locally. Any other
/// function token (`url(`, `image-set(`, `element(` ...) could load an
/// external resource, so its parenthesis is escaped and it stays an ident.
const LOCAL_CSS_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
    "color-mix", "calc", "var", "linear-gradient", "radial-gradient", "conic-gradient",
    "repeating-linear-gradient", "repeating-radial-gradient", "repeating-conic-gradient",
];

fn push_css_hex(out: &mut String, c: char) {
    out.push_str(&format!("\\{:x} ", c as u32));
}

/// Escape characters that could end a CSS declaration, rule or the
/// enclosing `<style>` element, open a comment, or call a function that
/// fetches a resource. Legal color syntax passes through unchanged.
pub fn css_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut ident = String::new();
    // Open parentheses of allowed functions not yet closed.
    let mut depth = 0usize;
    for c in value.chars() {
        match c {
            '<' | '>' | '&' | '"' | '\'' | '{' | '}' | ';' | '\\' | '*' => push_css_hex(&mut out, c),
            '/' if depth == 0 => push_css_hex(&mut out, c),
            '(' => {
                let name = ident.to_ascii_lowercase();
                if LOCAL_CSS_FUNCTIONS.contains(&name.as_str()) {
                    depth += 1;
                    out.push(c);
                } else {
                    push_css_hex(&mut out, c);
                }
            }
            ')' if depth > 0 => {
                depth -= 1;
                out.push(c);
            }
            ')' => push_css_hex(&mut out, c),
            c if c.is_control() => push_css_hex(&mut out, c),
            c => out.push(c),
        }
        if c.is_alphanumeric() || c == '-' || c == '_' {
            ident.push(c);
        } else {
            ident.clear();
        }
    }
    out
}

fn css_value_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = tera::try_get_value!("css_value", "value", String, value);
    Ok(Value::String(css_escape(&s)))
}

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

/// `Site\Landing.HTML.tera` → `site/landing.html`.
fn normalize_template_name(path: &Path) -> String {
    let name = path.to_string_lossy().replace('\\', "/").to_lowercase();
    match name.strip_suffix(".tera") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!(template = %name, path = %path.display(), "loaded user template");
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert((*name).to_string(), (*content).to_string());
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html"]);
    tera.register_filter("css_value", css_value_filter);
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

/// Strip CR so output is LF-only regardless of how templates were checked out.
fn normalize_line_endings(s: String) -> String {
    if s.contains('\r') {
        s.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults, e.g. `site/landing.html.tera` replaces `site/landing.html`.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the page for `ctx.kind`.
    pub fn render(&self, ctx: &SiteContext) -> Result<RenderedDocument, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let html = self.tera.render(ctx.kind.template_name(), &tera_ctx)?;
        tracing::debug!(kind = %ctx.kind, bytes = html.len(), "rendered site document");
        Ok(RenderedDocument::new(normalize_line_endings(html)))
    }

    /// Render the host page embedding `document` in a sandboxed frame.
    pub fn render_preview(&self, document: &RenderedDocument) -> Result<String, RenderError> {
        let mut tera_ctx = tera::Context::new();
        tera_ctx.insert("document", document.as_str());
        let html = self.tera.render(PREVIEW_TEMPLATE, &tera_ctx)?;
        Ok(normalize_line_endings(html))
    }
}

// ---------------------------------------------------------------------------
// SiteRenderer
// ---------------------------------------------------------------------------

/// Renderer over the embedded templates. Create once with [`SiteRenderer::new`] and reuse.
pub struct SiteRenderer {
    engine: TemplateEngine,
}

impl SiteRenderer {
    /// Construct a new [`SiteRenderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(SiteRenderer { engine: TemplateEngine::new(None)? })
    }

    /// Construct a renderer whose templates may be overridden from `dir`.
    pub fn with_overrides(dir: &Path) -> Result<Self, RenderError> {
        Ok(SiteRenderer { engine: TemplateEngine::new(Some(dir))? })
    }

    /// Render `descriptor` as a page of the given `kind`.
    pub fn render(
        &self,
        descriptor: &SiteDescriptor,
        kind: SiteKind,
    ) -> Result<RenderedDocument, RenderError> {
        let ctx = SiteContext::from_descriptor(descriptor, kind);
        self.render_with_context(&ctx)
    }

    /// Render using a caller-provided [`SiteContext`].
    pub fn render_with_context(&self, ctx: &SiteContext) -> Result<RenderedDocument, RenderError> {
        self.engine.render(ctx)
    }

    pub fn preview_page(&self, document: &RenderedDocument) -> Result<String, RenderError> {
        self.engine.render_preview(document)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
