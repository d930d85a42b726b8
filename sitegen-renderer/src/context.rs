//! Template context — serializable rendering payload built from a [`SiteDescriptor`].

use serde::{Deserialize, Serialize};

use sitegen_core::types::{SiteDescriptor, SiteKind, DEFAULT_BACKGROUND};

use crate::error::RenderError;

/// Rendering payload for one page.
///
/// Values are raw user text; escaping happens in the templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContext {
    pub kind: SiteKind,
    /// Page `<title>` and top-level heading.
    pub title: String,
    /// Main paragraph.
    pub body: String,
    /// CSS background value; never empty.
    pub background: String,
    /// Descriptor fields the kind does not map, in key order. Empty values are skipped.
    pub extra_fields: Vec<FieldCtx>,
}

/// An unmapped descriptor field, rendered as heading + paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCtx {
    pub name: String,
    pub value: String,
}

impl SiteContext {
    /// Build a [`SiteContext`] for `kind` from a descriptor.
    pub fn from_descriptor(descriptor: &SiteDescriptor, kind: SiteKind) -> Self {
        // Whitespace-only counts as empty.
        let color = descriptor.get(kind.color_field()).trim();
        let background = if color.is_empty() {
            DEFAULT_BACKGROUND.to_string()
        } else {
            color.to_string()
        };

        let mapped = kind.field_names();
        let extra_fields = descriptor
            .iter()
            .filter(|(name, value)| !value.is_empty() && !mapped.iter().any(|m| m == name))
            .map(|(name, value)| FieldCtx {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();

        SiteContext {
            kind,
            title: descriptor.get(kind.title_field()).to_string(),
            body: descriptor.get(kind.body_field()).to_string(),
            background,
            extra_fields,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
