//! The bundled dataset loaded once per session.

use serde::{Deserialize, Serialize};

use crate::{Budget, Pot, RawTransaction};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    #[serde(default)]
    pub current: f64,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expenses: f64,
}

/// Read-only source records for the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    #[serde(default)]
    pub balance: Balance,
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub pots: Vec<Pot>,
}

impl Dataset {
    pub fn recurring_transactions(&self) -> impl Iterator<Item = &RawTransaction> {
        self.transactions.iter().filter(|txn| txn.recurring)
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty() && self.pots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_an_empty_dataset() {
        let dataset: Dataset = serde_json::from_str("{}").expect("parse dataset");
        assert!(dataset.is_empty());
        assert_eq!(dataset.balance, Balance::default());
    }

    #[test]
    fn recurring_transactions_are_filtered() {
        let dataset = Dataset {
            transactions: vec![
                RawTransaction::new("Netflix", "2024-03-03", -15.99).recurring(),
                RawTransaction::new("Lunch", "2024-03-04", -12.0),
            ],
            ..Dataset::default()
        };
        let names: Vec<_> = dataset
            .recurring_transactions()
            .map(|txn| txn.name.as_str())
            .collect();
        assert_eq!(names, vec!["Netflix"]);
    }
}
