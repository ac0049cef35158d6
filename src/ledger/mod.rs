//! Income/expense ledger: line items, id assignment, totals, and percentages.

pub mod item;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use item::{LineItem, ParseVariantError, Percentage, Variant};
pub use ledger::{IdPolicy, Ledger, Summary, Totals};
