//! Budget edits and spending roll-ups.

use finboard_domain::{position_by_name, Budget, NamedEntity, RawTransaction};

use crate::{dates, CoreError};

/// Spending against one budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSpending {
    pub category: String,
    pub maximum: f64,
    pub theme: String,
    pub spent: f64,
    pub remaining: f64,
    /// `spent / maximum` as a rounded percentage; may exceed 100.
    pub percent_used: u32,
}

/// A budget's slice of the donut chart, in percent of the combined limit.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAllocation {
    pub category: String,
    pub theme: String,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverview {
    pub budgets: Vec<BudgetSpending>,
    pub allocations: Vec<BudgetAllocation>,
    pub total_spent: f64,
    /// Combined maximum of every budget, never below 1.
    pub limit: f64,
}

pub struct BudgetService;

impl BudgetService {
    pub fn validate(budget: &Budget) -> Result<(), CoreError> {
        if budget.category.trim().is_empty() {
            return Err(CoreError::Validation("budget category is required".into()));
        }
        if !budget.maximum.is_finite() || budget.maximum <= 0.0 {
            return Err(CoreError::Validation(format!(
                "budget maximum for `{}` must be greater than 0",
                budget.category
            )));
        }
        if matches!(budget.theme.as_deref(), Some(theme) if theme.trim().is_empty()) {
            return Err(CoreError::Validation(format!(
                "budget theme for `{}` cannot be blank",
                budget.category
            )));
        }
        Ok(())
    }

    /// Adds a budget, replacing any budget that already tracks the same category.
    /// Returns `true` when an existing budget was replaced.
    pub fn add(budgets: &mut Vec<Budget>, budget: Budget) -> Result<bool, CoreError> {
        Self::validate(&budget)?;
        match position_by_name(budgets.as_slice(), budget.name()) {
            Some(index) => {
                budgets[index] = budget;
                Ok(true)
            }
            None => {
                budgets.push(budget);
                Ok(false)
            }
        }
    }

    pub fn edit(
        budgets: &mut [Budget],
        original_category: &str,
        updated: Budget,
    ) -> Result<(), CoreError> {
        Self::validate(&updated)?;
        let index = Self::position(budgets, original_category)?;
        let collides = budgets
            .iter()
            .enumerate()
            .any(|(i, b)| i != index && b.name() == updated.name());
        if collides {
            return Err(CoreError::Validation(format!(
                "a budget for `{}` already exists",
                updated.category
            )));
        }
        budgets[index] = updated;
        Ok(())
    }

    pub fn remove(budgets: &mut Vec<Budget>, category: &str) -> Result<Budget, CoreError> {
        let index = Self::position(budgets, category)?;
        Ok(budgets.remove(index))
    }

    fn position(budgets: &[Budget], category: &str) -> Result<usize, CoreError> {
        position_by_name(budgets, category)
            .ok_or_else(|| CoreError::BudgetNotFound(category.to_string()))
    }

    /// Total charged to `category`; credits are ignored.
    pub fn spent(category: &str, transactions: &[RawTransaction]) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.belongs_to(category) && txn.is_charge())
            .map(|txn| txn.amount.abs())
            .sum()
    }

    pub fn overview(budgets: &[Budget], transactions: &[RawTransaction]) -> BudgetOverview {
        let spending: Vec<BudgetSpending> = budgets
            .iter()
            .map(|budget| {
                let spent = Self::spent(&budget.category, transactions);
                let percent_used = if budget.maximum > 0.0 {
                    (spent / budget.maximum * 100.0).round() as u32
                } else {
                    0
                };
                BudgetSpending {
                    category: budget.category.clone(),
                    maximum: budget.maximum,
                    theme: budget.theme_or_default().to_string(),
                    spent,
                    remaining: (budget.maximum - spent).max(0.0),
                    percent_used,
                }
            })
            .collect();

        let combined: f64 = budgets.iter().map(|budget| budget.maximum).sum();
        let limit = combined.max(1.0);
        let mut cursor = 0.0;
        let allocations = budgets
            .iter()
            .map(|budget| {
                let start = cursor;
                cursor += budget.maximum / limit * 100.0;
                BudgetAllocation {
                    category: budget.category.clone(),
                    theme: budget.theme_or_default().to_string(),
                    start,
                    end: cursor,
                }
            })
            .collect();

        BudgetOverview {
            total_spent: spending.iter().map(|row| row.spent).sum(),
            budgets: spending,
            allocations,
            limit,
        }
    }

    /// Newest `limit` transactions in `category`.
    pub fn latest_transactions(
        category: &str,
        transactions: &[RawTransaction],
        limit: usize,
    ) -> Result<Vec<RawTransaction>, CoreError> {
        let mut rows = Vec::new();
        for txn in transactions.iter().filter(|txn| txn.belongs_to(category)) {
            rows.push((dates::require_timestamp(&txn.name, &txn.date)?, txn));
        }
        rows.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(rows
            .into_iter()
            .take(limit)
            .map(|(_, txn)| txn.clone())
            .collect())
    }
}
