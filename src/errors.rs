use thiserror::Error;

use finboard_config::ConfigError;
use finboard_core::CoreError;

/// Error type surfaced by the dashboard session.
#[derive(Debug, Error)]
pub enum FinboardError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
