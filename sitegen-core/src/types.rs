//! Domain types for the site generator.
//!
//! A [`SiteDescriptor`] is a flat map of field name to string value. Which
//! fields drive the title, body and theme color is decided by the
//! [`SiteKind`] the descriptor is rendered as.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Background used when the theme color field is empty.
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed descriptor field name (`name`, `bio`, `themeColor`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldName(pub String);

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// SiteDescriptor
// ---------------------------------------------------------------------------

/// User-supplied field values driving generation.
///
/// Missing fields read as the empty string; no field is required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteDescriptor {
    fields: BTreeMap<String, String>,
}

impl SiteDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `name`, or `""` when unset.
    pub fn get(&self, name: impl AsRef<str>) -> &str {
        self.fields
            .get(name.as_ref())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<FieldName>, value: impl Into<String>) {
        self.fields.insert(name.into().0, value.into());
    }

    /// Builder form of [`SiteDescriptor::set`].
    pub fn with(mut self, name: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn remove(&mut self, name: impl AsRef<str>) -> Option<String> {
        self.fields.remove(name.as_ref())
    }

    /// Fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overlay every field of `other` onto `self`.
    pub fn merge(&mut self, other: &SiteDescriptor) {
        for (k, v) in other.iter() {
            self.set(k, v);
        }
    }
}

impl<K: Into<FieldName>, V: Into<String>> FromIterator<(K, V)> for SiteDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut d = SiteDescriptor::new();
        for (k, v) in iter {
            d.set(k, v);
        }
        d
    }
}

// ---------------------------------------------------------------------------
// SiteKind
// ---------------------------------------------------------------------------

/// The page layouts the generator knows how to render.
///
/// | Kind      | title / heading | body          | theme color  |
/// |-----------|-----------------|---------------|--------------|
/// | `Landing` | `name`          | `description` | `color`      |
/// | `Profile` | `title`         | `bio`         | `themeColor` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    #[default]
    Landing,
    Profile,
}

impl SiteKind {
    /// All kinds in a stable order.
    pub fn all() -> &'static [SiteKind] {
        &[SiteKind::Landing, SiteKind::Profile]
    }

    pub fn title_field(&self) -> &'static str {
        match self {
            SiteKind::Landing => "name",
            SiteKind::Profile => "title",
        }
    }

    pub fn body_field(&self) -> &'static str {
        match self {
            SiteKind::Landing => "description",
            SiteKind::Profile => "bio",
        }
    }

    pub fn color_field(&self) -> &'static str {
        match self {
            SiteKind::Landing => "color",
            SiteKind::Profile => "themeColor",
        }
    }

    /// Fields this kind maps onto page structure, in display order.
    pub fn field_names(&self) -> [&'static str; 3] {
        [self.title_field(), self.body_field(), self.color_field()]
    }

    /// Name of the embedded template rendering this kind.
    pub fn template_name(&self) -> &'static str {
        match self {
            SiteKind::Landing => "site/landing.html",
            SiteKind::Profile => "site/profile.html",
        }
    }
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteKind::Landing => write!(f, "landing"),
            SiteKind::Profile => write!(f, "profile"),
        }
    }
}

impl FromStr for SiteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "landing" => Ok(SiteKind::Landing),
            "profile" => Ok(SiteKind::Profile),
            other => Err(format!(
                "unknown site kind '{other}'; expected: landing, profile"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
