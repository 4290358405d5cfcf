//! Search, sort and pagination for the bill and transaction lists.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use finboard_domain::{Amounted, Bill, NamedEntity, RawTransaction, SortOption};

use crate::{dates, CoreError};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filters and ordering requested by the transactions list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub search: String,
    /// `None` shows every category.
    pub category: Option<String>,
    pub sort: SortOption,
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort: SortOption::Latest,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TransactionQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self.page = 1;
        self
    }

    pub fn sorted(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self.page = 1;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One page of the filtered transaction list.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPage {
    pub items: Vec<RawTransaction>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl TransactionPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// A transaction paired with its parsed timestamp for date orderings.
struct DatedRow<'a> {
    at: DateTime<Utc>,
    txn: &'a RawTransaction,
}

impl NamedEntity for DatedRow<'_> {
    fn name(&self) -> &str {
        self.txn.name()
    }
}

impl Amounted for DatedRow<'_> {
    fn amount(&self) -> f64 {
        self.txn.amount()
    }
}

pub struct ViewService;

impl ViewService {
    /// Returns the bills whose title contains `query`, ordered by `sort`.
    ///
    /// The sort is stable and the input slice is left untouched.
    pub fn apply(bills: &[Bill], query: &str, sort: SortOption) -> Vec<Bill> {
        let mut visible: Vec<Bill> = bills
            .iter()
            .filter(|bill| Self::matches(*bill, query))
            .cloned()
            .collect();
        sort_by_option(&mut visible, sort, |bill| bill.date);
        visible
    }

    /// Whether the record's name contains `query`.
    pub fn matches<T: NamedEntity + ?Sized>(item: &T, query: &str) -> bool {
        Self::matches_query(item.name(), query)
    }

    /// Case-insensitive substring match. A blank query matches everything.
    pub fn matches_query(text: &str, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        text.to_lowercase().contains(&query.to_lowercase())
    }

    /// Filters, sorts and pages the transaction list.
    ///
    /// Amount sorts use the signed amount. Date sorts fail on unparseable dates.
    pub fn transactions(
        transactions: &[RawTransaction],
        query: &TransactionQuery,
    ) -> Result<TransactionPage, CoreError> {
        if query.per_page == 0 {
            return Err(CoreError::Validation(
                "transactions per page must be at least 1".into(),
            ));
        }

        let filtered = transactions.iter().filter(|txn| {
            Self::matches(*txn, &query.search)
                && query
                    .category
                    .as_deref()
                    .map_or(true, |category| txn.belongs_to(category))
        });

        let mut rows = Vec::new();
        for txn in filtered {
            let at = match query.sort {
                SortOption::Latest | SortOption::Oldest => {
                    dates::require_timestamp(&txn.name, &txn.date)?
                }
                _ => DateTime::<Utc>::MIN_UTC,
            };
            rows.push(DatedRow { at, txn });
        }
        sort_by_option(&mut rows, query.sort, |row| row.at);

        let total_items = rows.len();
        let total_pages = total_items.div_ceil(query.per_page);
        let page = query.page.max(1);
        let items = rows
            .into_iter()
            .skip((page - 1).saturating_mul(query.per_page))
            .take(query.per_page)
            .map(|row| row.txn.clone())
            .collect();

        Ok(TransactionPage {
            items,
            page,
            total_pages,
            total_items,
        })
    }

    /// Distinct transaction categories in locale order, for the category filter.
    pub fn categories(transactions: &[RawTransaction]) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for category in transactions.iter().filter_map(|txn| txn.category.as_deref()) {
            if !category.is_empty() && !categories.iter().any(|known| known == category) {
                categories.push(category.to_string());
            }
        }
        categories.sort_by(|a, b| locale_compare(a, b));
        categories
    }
}

fn sort_by_option<T, F>(items: &mut [T], sort: SortOption, at: F)
where
    T: NamedEntity + Amounted,
    F: Fn(&T) -> DateTime<Utc>,
{
    items.sort_by(|a, b| match sort {
        SortOption::Latest => at(b).cmp(&at(a)),
        SortOption::Oldest => at(a).cmp(&at(b)),
        SortOption::AZ => locale_compare(a.name(), b.name()),
        SortOption::ZA => locale_compare(b.name(), a.name()),
        SortOption::Highest => b.amount().total_cmp(&a.amount()),
        SortOption::Lowest => a.amount().total_cmp(&b.amount()),
    });
}

/// Orders text case-insensitively, then puts lowercase before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    primary.then_with(|| {
        a.chars()
            .map(|ch| ch.is_uppercase())
            .cmp(b.chars().map(|ch| ch.is_uppercase()))
    })
}
