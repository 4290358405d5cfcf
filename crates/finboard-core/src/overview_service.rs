//! Figures for the landing page.

use chrono::NaiveDate;

use finboard_domain::{Balance, Bill, Budget, Pot, RawTransaction};

use crate::{
    budget_service::{BudgetOverview, BudgetService},
    classification_service::{BillRules, BillSummary, ClassificationService},
    pot_service::PotService,
};

pub const RECENT_TRANSACTIONS: usize = 5;

/// Everything the overview cards display.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub balance: Balance,
    pub total_saved: f64,
    pub pots: Vec<Pot>,
    pub budgets: BudgetOverview,
    /// Leading transactions of the dataset, in dataset order.
    pub recent_transactions: Vec<RawTransaction>,
    pub bills: BillSummary,
}

/// Borrowed inputs for [`OverviewService::build`].
#[derive(Debug, Clone, Copy)]
pub struct OverviewInputs<'a> {
    pub balance: Balance,
    pub transactions: &'a [RawTransaction],
    pub budgets: &'a [Budget],
    pub pots: &'a [Pot],
    pub bills: &'a [Bill],
}

pub struct OverviewService;

impl OverviewService {
    pub fn build(inputs: OverviewInputs<'_>, reference: NaiveDate, rules: BillRules) -> Overview {
        Overview {
            balance: inputs.balance,
            total_saved: PotService::total_saved(inputs.pots),
            pots: inputs.pots.to_vec(),
            budgets: BudgetService::overview(inputs.budgets, inputs.transactions),
            recent_transactions: inputs
                .transactions
                .iter()
                .take(RECENT_TRANSACTIONS)
                .cloned()
                .collect(),
            bills: ClassificationService::classify(inputs.bills, reference, rules),
        }
    }
}
