//! Build errors for the calculator builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Configuration rejected: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Formatter symbols rejected: {0}")]
    InvalidFormatter(ConfigError),
}
