use budgety::currency::{format_amount, format_budget, format_percentage, month_label};
use budgety::ledger::{Percentage, Variant};
use chrono::NaiveDate;

#[test]
fn large_amounts_group_every_thousand() {
    assert_eq!(
        format_amount(1_234_567.891, Variant::Income, "$"),
        "+ 1,234,567.89 $"
    );
    assert_eq!(format_amount(999.0, Variant::Expense, "£"), "- 999.00 £");
    assert_eq!(format_amount(1000.0, Variant::Expense, "£"), "- 1,000.00 £");
}

#[test]
fn budget_sign_tracks_balance() {
    assert_eq!(format_budget(1500.5, "$"), "+ 1,500.50 $");
    assert_eq!(format_budget(-0.25, "$"), "- 0.25 $");
}

#[test]
fn percentage_display() {
    assert_eq!(format_percentage(Percentage::Whole(1)), "1%");
    assert_eq!(format_percentage(Percentage::Whole(150)), "150%");
    assert_eq!(format_percentage(Percentage::from(-1_i64)), "---");
}

#[test]
fn month_labels() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    assert_eq!(month_label(date), "January 2025");
}
