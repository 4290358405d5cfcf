#![doc(test(attr(deny(warnings))))]

//! Finboard derives recurring bills, classifies them against a reference date,
//! and tracks budgets and savings pots for a personal-finance dashboard.

pub mod dashboard;
pub mod errors;
pub mod utils;

pub use dashboard::{Dashboard, DashboardSnapshot};
pub use errors::FinboardError;
pub use finboard_config as config;
pub use finboard_core as core;
pub use finboard_data_json as data;
pub use finboard_domain as domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(build = %build.summary(), "Finboard tracing initialized.");
    });
}
