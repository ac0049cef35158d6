#![doc(test(attr(deny(warnings))))]

//! Budgety keeps a session ledger of income and expense items, derives the
//! available budget and each expense's share of income, and drives it from a
//! small command shell.
//!
//! ```
//! use budgety::ledger::{Ledger, Percentage, Variant};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_item(Variant::Income, "Salary", 200.0);
//! ledger.add_item(Variant::Expense, "Rent", 67.0);
//! let summary = ledger.refresh();
//! assert_eq!(summary.budget, 133.0);
//! assert_eq!(ledger.percentages(), vec![Percentage::Whole(34)]);
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budgety tracing initialized.");
    });
}
