#![allow(dead_code)]

use chrono::NaiveDate;
use finboard::{
    config::Config,
    core::FixedClock,
    domain::{Balance, Budget, Dataset, Pot, RawTransaction},
    Dashboard,
};
use once_cell::sync::Lazy;

/// A trimmed copy of the bundled dataset shape.
pub static SAMPLE_DATASET: Lazy<Dataset> = Lazy::new(|| Dataset {
    balance: Balance {
        current: 4836.0,
        income: 3814.25,
        expenses: 1700.5,
    },
    transactions: vec![
        RawTransaction::new("Emma Richardson", "2024-08-19T14:23:11Z", 75.5)
            .with_category("General")
            .with_avatar("./assets/images/avatars/emma-richardson.jpg"),
        RawTransaction::new("Savory Bites Bistro", "2024-08-19T20:23:11Z", -55.5)
            .with_category("Dining Out"),
        RawTransaction::new("Daniel Carter", "2024-08-18T09:45:32Z", -42.3)
            .with_category("General"),
        RawTransaction::new("Sun Park", "2024-08-17T16:12:05Z", 120.0)
            .with_category("General"),
        RawTransaction::new("Urban Services Hub", "2024-08-17T21:08:09Z", -65.0)
            .with_category("General"),
        RawTransaction::new("Spark Electric Solutions", "2024-08-02T09:25:11Z", -100.0)
            .with_category("Bills")
            .recurring(),
        RawTransaction::new("Serenity Spa & Wellness", "2024-08-03T14:00:37Z", -30.0)
            .with_category("Personal Care")
            .recurring(),
        RawTransaction::new("Pixel Playground", "2024-08-11T18:45:38Z", -10.0)
            .with_category("Entertainment")
            .recurring(),
        RawTransaction::new("Nimbus Data Storage", "2024-08-21T10:05:42Z", -9.99)
            .with_category("Bills")
            .recurring(),
        RawTransaction::new("Sun Park", "2024-08-28T11:00:00Z", 120.0)
            .with_category("General")
            .recurring(),
    ],
    budgets: vec![
        Budget::new("Entertainment", 50.0).with_theme("#277C78"),
        Budget::new("Bills", 750.0).with_theme("#82C9D7"),
        Budget::new("Dining Out", 75.0).with_theme("#F2CDAC"),
    ],
    pots: vec![
        Pot::new("Savings", 2000.0).with_total(159.0).with_theme("#277C78"),
        Pot::new("Concert Ticket", 150.0).with_total(110.0).with_theme("#626070"),
        Pot::new("Gift", 150.0).with_total(110.0).with_theme("#82C9D7"),
    ],
});

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// A dashboard over the sample data whose clock reads `today`.
pub fn dashboard_on(today: NaiveDate, config: &Config) -> Dashboard {
    dashboard_with(SAMPLE_DATASET.clone(), today, config)
}

/// A dashboard over `dataset` whose clock reads `today`.
pub fn dashboard_with(dataset: Dataset, today: NaiveDate, config: &Config) -> Dashboard {
    Dashboard::with_clock(dataset, config, Box::new(FixedClock::on(today)))
        .expect("build dashboard")
}
