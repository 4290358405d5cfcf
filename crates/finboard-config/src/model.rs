use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use finboard_domain::{ClassificationMode, PaidPolicy, SortOption};

use crate::ConfigError;

/// Stores user-configurable dashboard preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub bills: BillSettings,
    #[serde(default = "Config::default_transactions_per_page")]
    pub transactions_per_page: usize,
    #[serde(default)]
    pub default_sort: SortOption,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional dataset location. Defaults to `<data dir>/finboard/data.json`.
    pub data_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bills: BillSettings::default(),
            transactions_per_page: Self::default_transactions_per_page(),
            default_sort: SortOption::default(),
            data_path: None,
        }
    }
}

impl Config {
    pub fn default_transactions_per_page() -> usize {
        10
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transactions_per_page == 0 {
            return Err(ConfigError::Invalid(
                "transactions_per_page must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn resolve_data_path(&self) -> PathBuf {
        if let Some(path) = &self.data_path {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("finboard").join("data.json")
    }
}

/// Rules used when deriving and classifying recurring bills.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillSettings {
    #[serde(default)]
    pub paid_policy: PaidPolicy,
    #[serde(default)]
    pub classification_mode: ClassificationMode,
    #[serde(default = "BillSettings::default_due_soon_days")]
    pub due_soon_days: u32,
}

impl Default for BillSettings {
    fn default() -> Self {
        Self {
            paid_policy: PaidPolicy::default(),
            classification_mode: ClassificationMode::default(),
            due_soon_days: Self::default_due_soon_days(),
        }
    }
}

impl BillSettings {
    pub fn default_due_soon_days() -> u32 {
        2
    }
}
