use chrono::NaiveDate;

use crate::{
    bill_service::BillService,
    classification_service::{BillRules, ClassificationService},
    overview_service::{OverviewInputs, OverviewService},
    view_service::{TransactionQuery, ViewService},
};
use finboard_domain::{
    Balance, BillBucket, Budget, ClassificationMode, PaidPolicy, Pot, RawTransaction, SortOption,
};

fn recurring_transactions() -> Vec<RawTransaction> {
    vec![
        RawTransaction::new("Spark Electric Solutions", "2024-08-02T09:25:11Z", -100.0)
            .with_category("Bills")
            .recurring(),
        RawTransaction::new("Serenity Spa & Wellness", "2024-08-03T14:00:37Z", -30.0)
            .with_category("Personal Care")
            .recurring(),
        RawTransaction::new("Elevate Education", "2024-08-04T11:15:22Z", -50.0)
            .with_category("Education")
            .recurring(),
        RawTransaction::new("Pixel Playground", "2024-08-11T18:45:38Z", -10.0)
            .with_category("Entertainment")
            .recurring(),
        RawTransaction::new("Nimbus Data Storage", "2024-08-21T10:05:42Z", -9.99)
            .with_category("Bills")
            .recurring(),
        RawTransaction::new("ByteWise", "2024-08-23T16:20:11Z", -49.99)
            .with_category("Lifestyle")
            .recurring(),
    ]
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, d).unwrap()
}

#[test]
fn derivation_is_idempotent() {
    let txns = recurring_transactions();
    let first = BillService::derive(&txns, PaidPolicy::default()).unwrap();
    let second = BillService::derive(&txns, PaidPolicy::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn netflix_on_the_third_is_due_soon() {
    let txns = vec![RawTransaction::new("Netflix", "2024-03-03", -15.99).recurring()];
    let bills = BillService::derive(&txns, PaidPolicy::default()).unwrap();
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].due_label, "Monthly - 3rd");
    assert_eq!(bills[0].amount, 15.99);
    assert_eq!(bills[0].id, "0-netflix");

    let reference = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    assert_eq!(
        ClassificationService::bucket(&bills[0], reference, BillRules::default()),
        BillBucket::DueSoon
    );
}

#[test]
fn earlier_day_is_paid() {
    let txns = vec![RawTransaction::new("Gym", "2024-05-03", -40.0).recurring()];
    let bills = BillService::derive(&txns, PaidPolicy::default()).unwrap();
    let reference = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
    assert_eq!(
        ClassificationService::bucket(&bills[0], reference, BillRules::default()),
        BillBucket::Paid
    );
}

#[test]
fn partition_is_exhaustive_for_every_reference_day() {
    let bills = BillService::derive(&recurring_transactions(), PaidPolicy::default()).unwrap();
    for mode in [ClassificationMode::DayOfMonth, ClassificationMode::Calendar] {
        let rules = BillRules::new(mode, 2);
        for d in 1..=30 {
            let buckets = ClassificationService::partition(&bills, day(d), rules);
            assert_eq!(buckets.len(), bills.len(), "{mode} on day {d}");

            let summary = ClassificationService::classify(&bills, day(d), rules);
            let parts = summary.paid_total + summary.due_soon_total + summary.upcoming_total;
            assert!((parts - summary.total).abs() < 1e-9, "{mode} on day {d}");
            assert_eq!(summary.due_soon_count, buckets.due_soon.len());
        }
    }
}

#[test]
fn summary_for_mid_month_reference() {
    let bills = BillService::derive(&recurring_transactions(), PaidPolicy::default()).unwrap();
    let summary = ClassificationService::classify(&bills, day(3), BillRules::default());
    assert_eq!(summary.paid_count, 2);
    assert!((summary.paid_total - 130.0).abs() < 1e-9);
    assert_eq!(summary.due_soon_count, 1);
    assert!((summary.due_soon_total - 50.0).abs() < 1e-9);
    assert_eq!(summary.upcoming_count, 3);
    assert!((summary.upcoming_total - 69.98).abs() < 1e-9);
}

#[test]
fn highest_sort_is_stable_for_ties() {
    let txns = vec![
        RawTransaction::new("First", "2024-08-01", -20.0).recurring(),
        RawTransaction::new("Big", "2024-08-02", -99.0).recurring(),
        RawTransaction::new("Second", "2024-08-03", -20.0).recurring(),
        RawTransaction::new("Third", "2024-08-04", -20.0).recurring(),
    ];
    let bills = BillService::derive(&txns, PaidPolicy::default()).unwrap();
    let sorted = ViewService::apply(&bills, "", SortOption::Highest);
    let titles: Vec<_> = sorted.iter().map(|bill| bill.title.as_str()).collect();
    assert_eq!(titles, vec!["Big", "First", "Second", "Third"]);

    let sorted = ViewService::apply(&bills, "", SortOption::Lowest);
    let titles: Vec<_> = sorted.iter().map(|bill| bill.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third", "Big"]);
}

#[test]
fn search_and_sort_bills() {
    let mut txns = recurring_transactions();
    txns.push(RawTransaction::new("Netflix", "2024-08-05", -15.99).recurring());
    let bills = BillService::derive(&txns, PaidPolicy::default()).unwrap();

    let matched = ViewService::apply(&bills, "net", SortOption::Latest);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].title, "Netflix");
    assert_eq!(ViewService::apply(&bills, "", SortOption::Latest).len(), bills.len());

    let latest = ViewService::apply(&bills, "", SortOption::Latest);
    assert_eq!(latest[0].title, "ByteWise");
    let oldest = ViewService::apply(&bills, "", SortOption::Oldest);
    assert_eq!(oldest[0].title, "Spark Electric Solutions");

    let az = ViewService::apply(&bills, "", SortOption::AZ);
    assert_eq!(az[0].title, "ByteWise");
    let za = ViewService::apply(&bills, "", SortOption::ZA);
    assert_eq!(za[0].title, "Spark Electric Solutions");

    // The source list is left in derivation order.
    assert_eq!(bills[0].title, "Spark Electric Solutions");
}

#[test]
fn transactions_are_filtered_and_paged() {
    let mut txns = recurring_transactions();
    for i in 1..=12 {
        txns.push(
            RawTransaction::new(format!("Grocer {i}"), format!("2024-07-{i:02}"), -(i as f64))
                .with_category("Groceries"),
        );
    }

    let query = TransactionQuery::default().in_category("Groceries");
    let first = ViewService::transactions(&txns, &query).unwrap();
    assert_eq!(first.total_items, 12);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].name, "Grocer 12");
    assert!(first.has_next());
    assert!(!first.has_previous());

    let second = ViewService::transactions(&txns, &query.clone().page(2)).unwrap();
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.items[1].name, "Grocer 1");

    let beyond = ViewService::transactions(&txns, &query.clone().page(9)).unwrap();
    assert!(beyond.items.is_empty());

    let searched = ViewService::transactions(
        &txns,
        &TransactionQuery::default().search("grocer 1").sorted(SortOption::Highest),
    )
    .unwrap();
    let names: Vec<_> = searched.items.iter().map(|txn| txn.name.as_str()).collect();
    assert_eq!(names, vec!["Grocer 1", "Grocer 10", "Grocer 11", "Grocer 12"]);
}

#[test]
fn transaction_date_sort_fails_on_bad_dates() {
    let txns = vec![RawTransaction::new("Mystery", "yesterday", -1.0)];
    assert!(ViewService::transactions(&txns, &TransactionQuery::default()).is_err());
    let by_name = TransactionQuery::default().sorted(SortOption::AZ);
    assert_eq!(ViewService::transactions(&txns, &by_name).unwrap().total_items, 1);
}

#[test]
fn overview_uses_shared_classifier() {
    let txns = recurring_transactions();
    let bills = BillService::derive(&txns, PaidPolicy::default()).unwrap();
    let budgets = vec![Budget::new("Bills", 750.0)];
    let pots = vec![Pot::new("Savings", 2000.0).with_total(159.0)];
    let overview = OverviewService::build(
        OverviewInputs {
            balance: Balance {
                current: 4836.0,
                income: 3814.25,
                expenses: 1700.5,
            },
            transactions: &txns,
            budgets: &budgets,
            pots: &pots,
            bills: &bills,
        },
        day(3),
        BillRules::default(),
    );
    assert_eq!(overview.recent_transactions.len(), 5);
    assert_eq!(overview.total_saved, 159.0);
    assert!((overview.budgets.total_spent - 109.99).abs() < 1e-9);
    assert_eq!(
        overview.bills,
        ClassificationService::classify(&bills, day(3), BillRules::default())
    );
}
