//! Raw transaction records as they arrive from the bundled dataset.

use serde::{Deserialize, Serialize};

use crate::common::*;

/// A single dataset transaction. Negative amounts leave the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawTransaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// ISO-8601 timestamp or date, parsed lazily by the core services.
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub recurring: bool,
}

impl RawTransaction {
    pub fn new(name: impl Into<String>, date: impl Into<String>, amount: f64) -> Self {
        Self {
            avatar: None,
            name: name.into(),
            category: None,
            date: date.into(),
            amount,
            recurring: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    /// Money leaving the account.
    pub fn is_charge(&self) -> bool {
        self.amount < 0.0
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    pub fn avatar_or_default(&self) -> &str {
        self.avatar.as_deref().unwrap_or("")
    }

    pub fn belongs_to(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }
}

impl NamedEntity for RawTransaction {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for RawTransaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for RawTransaction {
    fn display_label(&self) -> String {
        let sign = if self.is_charge() { '-' } else { '+' };
        format!("{} {} ${:.2}", self.name, sign, self.amount.abs())
    }
}
