//! finboard-data-json
//!
//! Loads the bundled dashboard dataset from JSON and validates it at the
//! boundary so the core services only ever see well-formed numbers.

use std::{
    fs,
    path::{Path, PathBuf},
};

use finboard_core::{BudgetService, CoreError, PotService};
use finboard_domain::Dataset;

/// Read-only JSON source for a [`Dataset`].
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    path: PathBuf,
}

impl JsonDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Dataset, CoreError> {
        load_dataset_from_path(&self.path)
    }
}

pub fn load_dataset_from_path(path: &Path) -> Result<Dataset, CoreError> {
    let data = fs::read_to_string(path)?;
    let dataset = parse_dataset(&data)?;
    tracing::debug!(
        path = %path.display(),
        transactions = dataset.transactions.len(),
        budgets = dataset.budgets.len(),
        pots = dataset.pots.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parses and validates a dataset document.
pub fn parse_dataset(data: &str) -> Result<Dataset, CoreError> {
    let dataset: Dataset =
        serde_json::from_str(data).map_err(|err| CoreError::Serialization(err.to_string()))?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Rejects non-finite amounts and malformed budgets or pots.
///
/// Dates are left alone; they are parsed, and rejected, by the services that
/// need them.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), CoreError> {
    let balance = dataset.balance;
    if ![balance.current, balance.income, balance.expenses]
        .iter()
        .all(|value| value.is_finite())
    {
        return Err(reject("balance figures must be finite numbers".into()));
    }
    if let Some(txn) = dataset.transactions.iter().find(|txn| !txn.amount.is_finite()) {
        return Err(reject(format!(
            "transaction `{}` has a non-finite amount",
            txn.name
        )));
    }
    for budget in &dataset.budgets {
        BudgetService::validate(budget).map_err(log_rejection)?;
    }
    for pot in &dataset.pots {
        PotService::validate(pot).map_err(log_rejection)?;
    }
    Ok(())
}

fn reject(message: String) -> CoreError {
    log_rejection(CoreError::Validation(message))
}

fn log_rejection(err: CoreError) -> CoreError {
    tracing::warn!(error = %err, "rejected dataset");
    err
}
