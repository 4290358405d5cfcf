//! Recurring bill records and the policies that classify them.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A monthly bill derived from a recurring transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub id: String,
    pub title: String,
    /// Always non-negative; the sign of the source transaction is dropped.
    pub amount: f64,
    pub due_label: String,
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// `source_date` normalised to UTC.
    pub date: DateTime<Utc>,
    /// The date exactly as the source transaction wrote it.
    pub source_date: String,
}

impl Bill {
    /// Calendar day of `date` in UTC.
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    pub fn theme(&self) -> &'static str {
        category_theme(self.category.as_deref())
    }
}

impl NamedEntity for Bill {
    fn name(&self) -> &str {
        &self.title
    }
}

impl Amounted for Bill {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Bill {
    fn display_label(&self) -> String {
        format!("{} ({}) ${:.2}", self.title, self.due_label, self.amount)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Where a bill falls relative to a reference date.
pub enum BillBucket {
    Paid,
    DueSoon,
    Upcoming,
}

impl fmt::Display for BillBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillBucket::Paid => "Paid",
            BillBucket::DueSoon => "Due Soon",
            BillBucket::Upcoming => "Upcoming",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
/// Decides the `paid` flag of a freshly derived bill.
pub enum PaidPolicy {
    /// Recurring credits count as settled, charges stay open.
    #[default]
    CreditedAmount,
    /// Every derived bill starts unpaid.
    NeverPaid,
}

impl PaidPolicy {
    pub fn is_paid(self, signed_amount: f64) -> bool {
        match self {
            PaidPolicy::CreditedAmount => signed_amount > 0.0,
            PaidPolicy::NeverPaid => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
/// Strategy used to compare a bill's due day with the reference date.
pub enum ClassificationMode {
    /// Compares the day-of-month only; month and year are ignored and
    /// due dates never wrap into the next month.
    #[default]
    DayOfMonth,
    /// Projects the bill onto the calendar and measures whole days to its
    /// next occurrence, wrapping across month boundaries.
    Calendar,
}

impl fmt::Display for ClassificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClassificationMode::DayOfMonth => "Day of Month",
            ClassificationMode::Calendar => "Calendar",
        };
        f.write_str(label)
    }
}
