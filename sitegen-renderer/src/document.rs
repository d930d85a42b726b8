//! The rendered artifact.

use std::fmt;

/// A complete, self-contained UTF-8 HTML document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub(crate) fn new(html: String) -> Self {
        RenderedDocument(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wrap HTML produced elsewhere (e.g. a file on disk) for deployment.
impl From<String> for RenderedDocument {
    fn from(html: String) -> Self {
        RenderedDocument(html)
    }
}

impl AsRef<str> for RenderedDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
