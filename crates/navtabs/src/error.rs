//! CLI error types.

use navtabs_config::ConfigError;
use navtabs_renderer::TabsError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Tabs(#[from] TabsError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
