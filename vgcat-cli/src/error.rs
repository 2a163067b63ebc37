use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog query failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] vgcat_catalog::CatalogError),

    /// Catalog file could not be loaded
    #[error("{0}")]
    Yaml(#[from] vgcat_catalog::YamlError),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file error
    #[error("Config error: {0}")]
    Config(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
