//! Buckets bills against a reference date and rolls them into summary totals.
//!
//! This is the single home of the paid / due-soon / upcoming rules; list
//! views, summary cards and the overview all go through it.

use chrono::{Datelike, NaiveDate};

use finboard_domain::{Bill, BillBucket, ClassificationMode};

use crate::dates;

pub const DEFAULT_DUE_SOON_DAYS: u32 = 2;

/// Parameters of the bill classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillRules {
    pub mode: ClassificationMode,
    /// How many days past the reference date still count as "due soon".
    pub due_soon_days: u32,
}

impl Default for BillRules {
    fn default() -> Self {
        Self {
            mode: ClassificationMode::DayOfMonth,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
        }
    }
}

impl BillRules {
    pub fn new(mode: ClassificationMode, due_soon_days: u32) -> Self {
        Self {
            mode,
            due_soon_days,
        }
    }
}

/// Bills split into mutually exclusive buckets, preserving input order.
#[derive(Debug, Default)]
pub struct BillBuckets<'a> {
    pub paid: Vec<&'a Bill>,
    pub due_soon: Vec<&'a Bill>,
    pub upcoming: Vec<&'a Bill>,
}

impl BillBuckets<'_> {
    pub fn len(&self) -> usize {
        self.paid.len() + self.due_soon.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Aggregated figures shown by the bill summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BillSummary {
    pub total: f64,
    pub paid_total: f64,
    pub due_soon_total: f64,
    pub upcoming_total: f64,
    pub paid_count: usize,
    pub due_soon_count: usize,
    pub upcoming_count: usize,
}

impl BillSummary {
    pub fn bill_count(&self) -> usize {
        self.paid_count + self.due_soon_count + self.upcoming_count
    }
}

pub struct ClassificationService;

impl ClassificationService {
    /// Places a single bill relative to `reference`.
    pub fn bucket(bill: &Bill, reference: NaiveDate, rules: BillRules) -> BillBucket {
        match rules.mode {
            ClassificationMode::DayOfMonth => {
                Self::bucket_by_day(bill.day_of_month(), reference.day(), rules.due_soon_days)
            }
            ClassificationMode::Calendar => {
                Self::bucket_by_calendar(bill.day_of_month(), reference, rules.due_soon_days)
            }
        }
    }

    pub fn partition<'a>(
        bills: &'a [Bill],
        reference: NaiveDate,
        rules: BillRules,
    ) -> BillBuckets<'a> {
        let mut buckets = BillBuckets::default();
        for bill in bills {
            match Self::bucket(bill, reference, rules) {
                BillBucket::Paid => buckets.paid.push(bill),
                BillBucket::DueSoon => buckets.due_soon.push(bill),
                BillBucket::Upcoming => buckets.upcoming.push(bill),
            }
        }
        buckets
    }

    /// Computes totals and counts for `bills` as of `reference`.
    pub fn classify(bills: &[Bill], reference: NaiveDate, rules: BillRules) -> BillSummary {
        let buckets = Self::partition(bills, reference, rules);
        let summary = BillSummary {
            total: sum(bills.iter()),
            paid_total: sum(buckets.paid.iter().copied()),
            due_soon_total: sum(buckets.due_soon.iter().copied()),
            upcoming_total: sum(buckets.upcoming.iter().copied()),
            paid_count: buckets.paid.len(),
            due_soon_count: buckets.due_soon.len(),
            upcoming_count: buckets.upcoming.len(),
        };
        tracing::debug!(
            %reference,
            mode = %rules.mode,
            paid = summary.paid_count,
            due_soon = summary.due_soon_count,
            upcoming = summary.upcoming_count,
            "classified bills"
        );
        summary
    }

    // Month and year are ignored; a due day in the next month never counts as soon.
    fn bucket_by_day(day: u32, today: u32, window: u32) -> BillBucket {
        if day <= today {
            BillBucket::Paid
        } else if day <= today.saturating_add(window) {
            BillBucket::DueSoon
        } else {
            BillBucket::Upcoming
        }
    }

    fn bucket_by_calendar(day: u32, reference: NaiveDate, window: u32) -> BillBucket {
        let this_cycle = dates::clamped_day(reference.year(), reference.month(), day);
        let next = match this_cycle {
            Some(due) if due > reference => Some(due),
            _ => {
                let (year, month) = dates::next_month(reference);
                dates::clamped_day(year, month, day)
            }
        };

        let days_until = next.map(|due| (due - reference).num_days());
        if matches!(days_until, Some(days) if days <= i64::from(window)) {
            return BillBucket::DueSoon;
        }
        match this_cycle {
            Some(due) if due <= reference => BillBucket::Paid,
            _ => BillBucket::Upcoming,
        }
    }
}

fn sum<'a>(bills: impl Iterator<Item = &'a Bill>) -> f64 {
    bills.map(|bill| bill.amount).sum()
}
