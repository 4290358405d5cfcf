//! Spending limits per category.

use serde::{Deserialize, Serialize};

use crate::common::*;

pub const DEFAULT_BUDGET_THEME: &str = "#7dd3fc";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub maximum: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Budget {
    pub fn new(category: impl Into<String>, maximum: f64) -> Self {
        Self {
            category: category.into(),
            maximum,
            theme: None,
        }
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn theme_or_default(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_BUDGET_THEME)
    }
}

impl NamedEntity for Budget {
    fn name(&self) -> &str {
        &self.category
    }
}

impl Amounted for Budget {
    fn amount(&self) -> f64 {
        self.maximum
    }
}

impl Displayable for Budget {
    fn display_label(&self) -> String {
        format!("{} (max ${:.2})", self.category, self.maximum)
    }
}
