//! Derives recurring bills from raw dataset transactions.

use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;

use finboard_domain::{Bill, PaidPolicy, RawTransaction};

use crate::{dates, CoreError};

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Turns recurring transactions into [`Bill`] records.
pub struct BillService;

impl BillService {
    /// Builds one bill per recurring transaction, in input order.
    ///
    /// Ids are `{index}-{slug}` where the index counts recurring records only,
    /// so they are unique among the returned bills and stable for equal input.
    /// Fails on the first transaction whose date cannot be parsed.
    pub fn derive(
        transactions: &[RawTransaction],
        policy: PaidPolicy,
    ) -> Result<Vec<Bill>, CoreError> {
        let bills = transactions
            .iter()
            .filter(|txn| txn.recurring)
            .enumerate()
            .map(|(index, txn)| Self::derive_one(index, txn, policy))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            transactions = transactions.len(),
            bills = bills.len(),
            ?policy,
            "derived recurring bills"
        );
        Ok(bills)
    }

    fn derive_one(
        index: usize,
        txn: &RawTransaction,
        policy: PaidPolicy,
    ) -> Result<Bill, CoreError> {
        let date = dates::require_timestamp(&txn.name, &txn.date)?;
        Ok(Bill {
            id: format!("{}-{}", index, Self::slug(&txn.name)),
            title: txn.name.clone(),
            amount: txn.amount.abs(),
            due_label: dates::monthly_due_label(date.day()),
            paid: policy.is_paid(txn.amount),
            category: txn.category.clone(),
            date,
            source_date: txn.date.clone(),
        })
    }

    /// Collapses whitespace runs into `-` and lowercases the result.
    pub fn slug(name: &str) -> String {
        WHITESPACE_RUN.replace_all(name, "-").to_lowercase()
    }
}
