//! Session state behind the dashboard pages.
//!
//! A [`Dashboard`] is built once from the bundled dataset. Bills are derived
//! up front; budget and pot edits only touch the in-memory copies and are
//! never written back.

use chrono::NaiveDate;
use serde::Serialize;

use finboard_config::{BillSettings, Config};
use finboard_core::{
    BillRules, BillService, BillSummary, BudgetOverview, BudgetService, ClassificationService,
    Clock, Overview, OverviewInputs, OverviewService, PotPreview, PotService, SystemClock,
    TransactionPage, TransactionQuery, ViewService,
};
use finboard_data_json::{validate_dataset, JsonDataSource};
use finboard_domain::{
    Balance, Bill, BillBucket, Budget, Dataset, Displayable, Pot, RawTransaction, SortOption,
};

use crate::FinboardError;

/// Editable state exposed to rendering layers.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub balance: Balance,
    pub bills: Vec<Bill>,
    pub budgets: Vec<Budget>,
    pub pots: Vec<Pot>,
}

pub struct Dashboard {
    balance: Balance,
    transactions: Vec<RawTransaction>,
    bills: Vec<Bill>,
    budgets: Vec<Budget>,
    pots: Vec<Pot>,
    settings: BillSettings,
    per_page: usize,
    default_sort: SortOption,
    clock: Box<dyn Clock>,
}

impl Dashboard {
    pub fn new(dataset: Dataset, config: &Config) -> Result<Self, FinboardError> {
        Self::with_clock(dataset, config, Box::new(SystemClock))
    }

    /// Builds a dashboard whose "today" comes from `clock`.
    pub fn with_clock(
        dataset: Dataset,
        config: &Config,
        clock: Box<dyn Clock>,
    ) -> Result<Self, FinboardError> {
        config.validate()?;
        validate_dataset(&dataset)?;
        let bills = BillService::derive(&dataset.transactions, config.bills.paid_policy)?;
        tracing::info!(
            transactions = dataset.transactions.len(),
            bills = bills.len(),
            budgets = dataset.budgets.len(),
            pots = dataset.pots.len(),
            "dashboard ready"
        );
        Ok(Self {
            balance: dataset.balance,
            transactions: dataset.transactions,
            bills,
            budgets: dataset.budgets,
            pots: dataset.pots,
            settings: config.bills,
            per_page: config.transactions_per_page,
            default_sort: config.default_sort,
            clock,
        })
    }

    /// Loads the dataset from the configured path.
    pub fn open(config: &Config) -> Result<Self, FinboardError> {
        let source = JsonDataSource::new(config.resolve_data_path());
        let dataset = source.load()?;
        Self::new(dataset, config)
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn transactions(&self) -> &[RawTransaction] {
        &self.transactions
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }

    pub fn rules(&self) -> BillRules {
        BillRules::new(self.settings.classification_mode, self.settings.due_soon_days)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ---- bills ----

    pub fn visible_bills(&self, query: &str, sort: Option<SortOption>) -> Vec<Bill> {
        ViewService::apply(&self.bills, query, sort.unwrap_or(self.default_sort))
    }

    /// Summary of `bills` as of the clock's current date.
    pub fn bill_summary(&self, bills: &[Bill]) -> BillSummary {
        self.bill_summary_on(bills, self.today())
    }

    pub fn bill_summary_on(&self, bills: &[Bill], reference: NaiveDate) -> BillSummary {
        ClassificationService::classify(bills, reference, self.rules())
    }

    pub fn bill_bucket(&self, bill: &Bill) -> BillBucket {
        ClassificationService::bucket(bill, self.today(), self.rules())
    }

    // ---- transactions ----

    /// A transactions query preloaded with the configured page size and sort.
    pub fn transaction_query(&self) -> TransactionQuery {
        TransactionQuery {
            sort: self.default_sort,
            per_page: self.per_page,
            ..TransactionQuery::default()
        }
    }

    pub fn transactions_page(
        &self,
        query: &TransactionQuery,
    ) -> Result<TransactionPage, FinboardError> {
        Ok(ViewService::transactions(&self.transactions, query)?)
    }

    pub fn categories(&self) -> Vec<String> {
        ViewService::categories(&self.transactions)
    }

    // ---- budgets ----

    pub fn budget_overview(&self) -> BudgetOverview {
        BudgetService::overview(&self.budgets, &self.transactions)
    }

    pub fn latest_for_budget(
        &self,
        category: &str,
        limit: usize,
    ) -> Result<Vec<RawTransaction>, FinboardError> {
        Ok(BudgetService::latest_transactions(
            category,
            &self.transactions,
            limit,
        )?)
    }

    /// Adds a budget; an existing budget for the same category is replaced.
    pub fn add_budget(&mut self, budget: Budget) -> Result<bool, FinboardError> {
        let label = budget.display_label();
        let replaced = BudgetService::add(&mut self.budgets, budget)?;
        tracing::info!(budget = %label, replaced, "budget saved");
        Ok(replaced)
    }

    pub fn edit_budget(
        &mut self,
        original_category: &str,
        updated: Budget,
    ) -> Result<(), FinboardError> {
        let label = updated.display_label();
        BudgetService::edit(&mut self.budgets, original_category, updated)?;
        tracing::info!(from = %original_category, budget = %label, "budget edited");
        Ok(())
    }

    pub fn remove_budget(&mut self, category: &str) -> Result<Budget, FinboardError> {
        let removed = BudgetService::remove(&mut self.budgets, category)?;
        tracing::info!(%category, "budget removed");
        Ok(removed)
    }

    // ---- pots ----

    pub fn total_saved(&self) -> f64 {
        PotService::total_saved(&self.pots)
    }

    pub fn add_pot(&mut self, pot: Pot) -> Result<(), FinboardError> {
        let label = pot.display_label();
        PotService::add(&mut self.pots, pot)?;
        tracing::info!(pot = %label, "pot added");
        Ok(())
    }

    pub fn edit_pot(&mut self, original_name: &str, updated: Pot) -> Result<(), FinboardError> {
        let label = updated.display_label();
        PotService::edit(&mut self.pots, original_name, updated)?;
        tracing::info!(from = %original_name, pot = %label, "pot edited");
        Ok(())
    }

    pub fn remove_pot(&mut self, name: &str) -> Result<Pot, FinboardError> {
        let removed = PotService::remove(&mut self.pots, name)?;
        tracing::info!(%name, "pot removed");
        Ok(removed)
    }

    pub fn add_money(&mut self, name: &str, amount: f64) -> Result<f64, FinboardError> {
        let total = PotService::deposit(&mut self.pots, name, amount)?;
        tracing::info!(%name, amount, total, "money added to pot");
        Ok(total)
    }

    pub fn withdraw_money(&mut self, name: &str, amount: f64) -> Result<f64, FinboardError> {
        let total = PotService::withdraw(&mut self.pots, name, amount)?;
        tracing::info!(%name, amount, total, "money withdrawn from pot");
        Ok(total)
    }

    pub fn preview_add_money(&self, name: &str, amount: f64) -> Option<PotPreview> {
        self.pot(name)
            .map(|pot| PotService::preview_deposit(pot, amount))
    }

    pub fn preview_withdraw_money(&self, name: &str, amount: f64) -> Option<PotPreview> {
        self.pot(name)
            .map(|pot| PotService::preview_withdraw(pot, amount))
    }

    fn pot(&self, name: &str) -> Option<&Pot> {
        self.pots.iter().find(|pot| pot.name == name)
    }

    // ---- overview ----

    pub fn overview(&self) -> Overview {
        OverviewService::build(
            OverviewInputs {
                balance: self.balance,
                transactions: &self.transactions,
                budgets: &self.budgets,
                pots: &self.pots,
                bills: &self.bills,
            },
            self.today(),
            self.rules(),
        )
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            balance: self.balance,
            bills: self.bills.clone(),
            budgets: self.budgets.clone(),
            pots: self.pots.clone(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, FinboardError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}
