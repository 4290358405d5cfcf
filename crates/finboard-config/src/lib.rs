//! finboard-config
//!
//! User preferences for the dashboard: bill rules, list defaults, data location.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{BillSettings, Config};
