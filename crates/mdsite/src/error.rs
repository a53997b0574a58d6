//! CLI error types.

use mdsite_config::ConfigError;
use mdsite_markup::MarkupError;
use mdsite_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Markup(#[from] MarkupError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
