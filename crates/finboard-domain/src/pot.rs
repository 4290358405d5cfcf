//! Savings pots.

use serde::{Deserialize, Serialize};

use crate::common::*;

pub const DEFAULT_POT_THEME: &str = "#10b981";

/// A named savings goal holding `total` towards `target`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pot {
    pub name: String,
    pub target: f64,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Pot {
    pub fn new(name: impl Into<String>, target: f64) -> Self {
        Self {
            name: name.into(),
            target,
            total: 0.0,
            theme: None,
        }
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn theme_or_default(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_POT_THEME)
    }

    /// Share of the target already saved, capped at 100. Zero when no target is set.
    pub fn progress_percent(&self) -> f64 {
        if self.target > 0.0 {
            (self.total / self.target * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

impl NamedEntity for Pot {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Pot {
    fn amount(&self) -> f64 {
        self.total
    }
}

impl Displayable for Pot {
    fn display_label(&self) -> String {
        format!(
            "{}: ${:.2} of ${:.0} ({:.1}%)",
            self.name,
            self.total,
            self.target,
            self.progress_percent()
        )
    }
}
