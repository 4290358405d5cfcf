//! finboard-core
//!
//! Business rules for the finance dashboard.
//! Depends on finboard-domain. Services never read the clock or touch storage;
//! callers pass the reference date in.

pub mod bill_service;
pub mod budget_service;
pub mod classification_service;
pub mod dates;
pub mod error;
pub mod overview_service;
pub mod pot_service;
pub mod time;
pub mod view_service;

pub use bill_service::*;
pub use budget_service::*;
pub use classification_service::*;
pub use error::CoreError;
pub use overview_service::*;
pub use pot_service::*;
pub use time::{Clock, FixedClock, SystemClock};
pub use view_service::*;

#[cfg(test)]
mod tests;
