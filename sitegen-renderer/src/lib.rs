//! # sitegen-renderer
//!
//! Tera-based template engine that turns a [`SiteDescriptor`] into a
//! self-contained HTML document.
//!
//! ## Usage
//!
//! ```rust
//! use sitegen_core::{SiteDescriptor, SiteKind};
//!
//! let descriptor = SiteDescriptor::new()
//!     .with("name", "My Cool Site")
//!     .with("description", "What your website is about...")
//!     .with("color", "#f0f0f0");
//! let doc = sitegen_renderer::render(&descriptor, SiteKind::Landing);
//! assert!(doc.as_str().contains("<h1>My Cool Site</h1>"));
//! ```
//!
//! [`SiteDescriptor`]: sitegen_core::SiteDescriptor

pub mod context;
pub mod document;
pub mod engine;
pub mod error;
pub mod preview;

pub use context::{FieldCtx, SiteContext};
pub use document::RenderedDocument;
pub use engine::{css_escape, SiteRenderer, TemplateEngine};
pub use error::RenderError;
pub use preview::{preview_page, render};
