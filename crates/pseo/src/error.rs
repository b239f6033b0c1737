//! CLI error types.

use pseo_config::ConfigError;
use pseo_site::{EnumerateError, RegistryError};
use pseo_static::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Enumerate(#[from] EnumerateError),

    #[error("{0}")]
    Build(#[from] BuildError),
}
