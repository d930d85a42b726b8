//! sitegen core library — domain types, draft persistence, config, errors.
//!
//! - [`types`] — [`SiteDescriptor`], [`SiteKind`]
//! - [`draft`] — saved form state (serialize / deserialize + file storage)
//! - [`config`] — deployment endpoint, project and credential resolution
//! - [`error`] — [`CoreError`]

pub mod config;
pub mod draft;
pub mod error;
pub mod types;

pub use config::DeployConfig;
pub use draft::SiteDraft;
pub use error::CoreError;
pub use types::{FieldName, SiteDescriptor, SiteKind, DEFAULT_BACKGROUND};
