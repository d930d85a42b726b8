//! Error types for sitegen-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from draft storage and config loading.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure (permission denied, disk full, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error, or parse error on an in-memory blob.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.sitegen/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
