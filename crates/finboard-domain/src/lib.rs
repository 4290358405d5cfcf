//! finboard-domain
//!
//! Pure dashboard models (transactions, bills, budgets, pots, dataset).
//! No I/O, no storage. Only data types and core enums.

pub mod bill;
pub mod budget;
pub mod common;
pub mod dataset;
pub mod pot;
pub mod transaction;

pub use bill::*;
pub use budget::*;
pub use common::*;
pub use dataset::*;
pub use pot::*;
pub use transaction::*;
