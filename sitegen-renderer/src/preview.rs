//! Total rendering entry points and the local preview surface.
//!
//! [`render`] and [`preview_page`] share one lazily built [`SiteRenderer`]
//! over the embedded templates. They cannot fail: if the engine does, a
//! minimal escaped document is produced instead and the error is logged.

use std::sync::OnceLock;

use tera::escape_html;

use sitegen_core::types::{SiteDescriptor, SiteKind};

use crate::context::SiteContext;
use crate::document::RenderedDocument;
use crate::engine::{css_escape, SiteRenderer};

fn shared() -> Option<&'static SiteRenderer> {
    static RENDERER: OnceLock<Option<SiteRenderer>> = OnceLock::new();
    RENDERER
        .get_or_init(|| match SiteRenderer::new() {
            Ok(r) => Some(r),
            Err(err) => {
                tracing::error!(error = %err, "embedded templates failed to load");
                None
            }
        })
        .as_ref()
}

/// Render `descriptor` as a page of `kind`. Total over all string inputs.
pub fn render(descriptor: &SiteDescriptor, kind: SiteKind) -> RenderedDocument {
    let ctx = SiteContext::from_descriptor(descriptor, kind);
    if let Some(renderer) = shared() {
        match renderer.render_with_context(&ctx) {
            Ok(doc) => return doc,
            Err(err) => tracing::error!(error = %err, kind = %kind, "template render failed"),
        }
    }
    fallback_document(&ctx)
}

/// Host page showing `document` inside a sandboxed `<iframe srcdoc>`.
///
/// The frame gets no `allow-*` tokens, so scripts in the generated page
/// never run and cannot reach the host page.
pub fn preview_page(document: &RenderedDocument) -> String {
    if let Some(renderer) = shared() {
        match renderer.preview_page(document) {
            Ok(page) => return page,
            Err(err) => tracing::error!(error = %err, "preview render failed"),
        }
    }
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Website Preview</title></head>\n<body><iframe title=\"Website Preview\" sandbox=\"\" srcdoc=\"{}\"></iframe></body></html>\n",
        escape_html(document.as_str())
    )
}

fn fallback_document(ctx: &SiteContext) -> RenderedDocument {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>");
    html.push_str(&escape_html(&ctx.title));
    html.push_str("</title><style>body { background: ");
    html.push_str(&css_escape(&ctx.background));
    html.push_str("; }</style></head>\n<body><h1>");
    html.push_str(&escape_html(&ctx.title));
    html.push_str("</h1><p>");
    html.push_str(&escape_html(&ctx.body));
    html.push_str("</p>");
    for field in &ctx.extra_fields {
        html.push_str("<h2>");
        html.push_str(&escape_html(&field.name));
        html.push_str("</h2><p>");
        html.push_str(&escape_html(&field.value));
        html.push_str("</p>");
    }
    html.push_str("</body></html>\n");
    RenderedDocument::from(html.replace('\r', ""))
}
