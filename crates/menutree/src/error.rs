//! Menu error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the edges of the menu system.
///
/// The tree operations themselves are total; only loading, checked
/// filtering, export, and template rendering can fail.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("cycle or excessive depth detected: menu is deeper than {limit} levels")]
    DepthExceeded { limit: usize },

    #[error("invalid menu definition '{label}': {reason}")]
    InvalidDefinition { label: String, reason: String },

    #[error("unknown role '{role}' referenced by '{label}'")]
    UnknownRole { role: String, label: String },

    #[error("unknown role '{0}'")]
    UnknownQueryRole(String),

    #[error("unsupported menu file format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read menu file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("template directory is not valid UTF-8: {}", .0.display())]
    InvalidTemplateDir(PathBuf),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
