//! Persisted form state.
//!
//! # Storage layout
//!
//! ```text
//! ~/.sitegen/
//!   drafts/
//!     site-draft.yaml   (mode 0600, directory mode 0700)
//! ```
//!
//! [`to_blob`] / [`from_blob`] are the pure serialization boundary; the
//! `*_at` functions add file storage on top of them under a fixed key.
//!
//! # API pattern
//!
//! Every storage function has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{SiteDescriptor, SiteKind};

/// Fixed storage key the draft is saved under.
pub const DRAFT_KEY: &str = "site-draft";

/// A saved, in-progress site: which layout plus the field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDraft {
    #[serde(default)]
    pub kind: SiteKind,
    #[serde(default)]
    pub fields: SiteDescriptor,
    pub updated_at: DateTime<Utc>,
}

impl SiteDraft {
    pub fn new(kind: SiteKind, fields: SiteDescriptor) -> Self {
        SiteDraft {
            kind,
            fields,
            updated_at: Utc::now(),
        }
    }

    /// Set one field and bump `updated_at`.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.set(name, value);
        self.updated_at = Utc::now();
    }

    /// Remove one field; `updated_at` only moves if something was removed.
    pub fn remove_field(&mut self, name: &str) -> Option<String> {
        let removed = self.fields.remove(name);
        if removed.is_some() {
            self.updated_at = Utc::now();
        }
        removed
    }
}

impl Default for SiteDraft {
    fn default() -> Self {
        SiteDraft::new(SiteKind::default(), SiteDescriptor::default())
    }
}

// ---------------------------------------------------------------------------
// 1. Serialization boundary
// ---------------------------------------------------------------------------

/// Serialize a draft to a text blob.
pub fn to_blob(draft: &SiteDraft) -> Result<String, CoreError> {
    Ok(serde_yaml::to_string(draft)?)
}

/// Parse a text blob produced by [`to_blob`].
pub fn from_blob(blob: &str) -> Result<SiteDraft, CoreError> {
    Ok(serde_yaml::from_str(blob)?)
}

// ---------------------------------------------------------------------------
// 2. Paths
// ---------------------------------------------------------------------------

/// `<home>/.sitegen/drafts/site-draft.yaml` — pure, no I/O.
pub fn draft_path_at(home: &Path) -> PathBuf {
    home.join(".sitegen")
        .join("drafts")
        .join(format!("{DRAFT_KEY}.yaml"))
}

// ---------------------------------------------------------------------------
// 3. Load / save / clear
// ---------------------------------------------------------------------------

/// Load the saved draft. A missing file is `Ok(None)`, not an error.
pub fn load_at(home: &Path) -> Result<Option<SiteDraft>, CoreError> {
    let path = draft_path_at(home);
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path)?;
    serde_yaml::from_str(&contents)
        .map(Some)
        .map_err(|e| CoreError::Parse { path, source: e })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Option<SiteDraft>, CoreError> {
    load_at(&home()?)
}

/// Atomically save the draft.
///
/// Write flow: serialize → `.yaml.tmp` sibling → `chmod 0600` → `rename`.
pub fn save_at(home: &Path, draft: &SiteDraft) -> Result<(), CoreError> {
    let path = draft_path_at(home);
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
            set_dir_permissions(dir)?;
        }
    }
    let tmp_path = path.with_file_name(format!("{DRAFT_KEY}.yaml.tmp"));

    let blob = to_blob(draft)?;
    std::fs::write(&tmp_path, blob)?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(())
}

/// `save_at` convenience wrapper.
pub fn save(draft: &SiteDraft) -> Result<(), CoreError> {
    save_at(&home()?, draft)
}

/// Remove the saved draft. Returns whether a file was deleted.
pub fn clear_at(home: &Path) -> Result<bool, CoreError> {
    let path = draft_path_at(home);
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(&path)?;
    Ok(true)
}

/// `clear_at` convenience wrapper.
pub fn clear() -> Result<bool, CoreError> {
    clear_at(&home()?)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

pub(crate) fn home() -> Result<PathBuf, CoreError> {
    dirs::home_dir().ok_or(CoreError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), CoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), CoreError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), CoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), CoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
