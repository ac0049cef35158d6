//! Display helpers for amounts, percentages, and the month banner.
//!
//! These only shape text for the shell; the ledger never formats anything.

use chrono::NaiveDate;

use crate::ledger::{Percentage, Variant};

const GROUPING_SEPARATOR: char = ',';
const UNDEFINED_PERCENTAGE: &str = "---";

/// Formats an amount as `+ 1,234.56 $` (income) or `- 1,234.56 $` (expense).
///
/// The sign comes from the variant, never from the value, which is shown as
/// an absolute number with two decimals.
pub fn format_amount(value: f64, variant: Variant, symbol: &str) -> String {
    let sign = match variant {
        Variant::Income => '+',
        Variant::Expense => '-',
    };
    format!("{sign} {} {symbol}", format_number(value))
}

/// A positive budget reads as income, anything else (including zero) as an expense.
pub fn format_budget(budget: f64, symbol: &str) -> String {
    let variant = if budget > 0.0 {
        Variant::Income
    } else {
        Variant::Expense
    };
    format_amount(budget, variant, symbol)
}

/// `N%` for a positive share, `---` for zero or undefined.
pub fn format_percentage(percentage: Percentage) -> String {
    match percentage.value() {
        Some(value) if value > 0 => format!("{value}%"),
        _ => UNDEFINED_PERCENTAGE.to_string(),
    }
}

/// `October 2026` style title for the summary banner.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn format_number(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}.{}", group_thousands(int_part), decimals)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
