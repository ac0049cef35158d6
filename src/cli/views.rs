//! Text renderings of ledger state for the shell.

use crate::cli::ui::{Table, TableColumn};
use crate::currency::{format_amount, format_budget, format_percentage};
use crate::ledger::{Ledger, LineItem, Summary, Variant};

const DESCRIPTION_WIDTH: usize = 32;

/// One table per variant; `None` when the variant has no items.
pub fn items_table(ledger: &Ledger, variant: Variant, symbol: &str, plain: bool) -> Option<String> {
    let items = ledger.items(variant);
    if items.is_empty() {
        return None;
    }

    let mut columns = vec![
        TableColumn::left("ID"),
        TableColumn::left("Description").max_width(DESCRIPTION_WIDTH),
        TableColumn::right("Value"),
    ];
    if variant == Variant::Expense {
        columns.push(TableColumn::right("Share"));
    }

    let mut table = Table::new(columns).plain(plain);
    for item in items {
        table.push_row(item_row(item, symbol));
    }
    Some(table.render())
}

fn item_row(item: &LineItem, symbol: &str) -> Vec<String> {
    let mut row = vec![
        item.handle(),
        item.description.clone(),
        format_amount(item.value, item.variant, symbol),
    ];
    if let Some(percentage) = item.percentage {
        row.push(format_percentage(percentage));
    }
    row
}

pub fn summary_entries(summary: &Summary, symbol: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Available budget", format_budget(summary.budget, symbol)),
        (
            "Income",
            format_amount(summary.total_income, Variant::Income, symbol),
        ),
        (
            "Expenses",
            format_amount(summary.total_expense, Variant::Expense, symbol),
        ),
        ("Spent", format_percentage(summary.overall_percentage)),
    ]
}

/// `exp-0 34%, exp-2 ---` in expense order; `None` without expenses.
pub fn percentages_line(ledger: &Ledger) -> Option<String> {
    let expenses = ledger.items(Variant::Expense);
    if expenses.is_empty() {
        return None;
    }
    let shares: Vec<String> = expenses
        .iter()
        .zip(ledger.percentages())
        .map(|(item, percentage)| format!("{} {}", item.handle(), format_percentage(percentage)))
        .collect();
    Some(shares.join(", "))
}

pub fn added_line(item: &LineItem, symbol: &str) -> String {
    format!(
        "Added {} {} {}",
        item.handle(),
        item.description,
        format_amount(item.value, item.variant, symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_item(Variant::Income, "Salary", 200.0);
        ledger.add_item(Variant::Expense, "Rent", 67.0);
        ledger.refresh();
        ledger
    }

    #[test]
    fn empty_variant_has_no_table() {
        let ledger = Ledger::new();
        assert!(items_table(&ledger, Variant::Income, "$", true).is_none());
        assert!(percentages_line(&ledger).is_none());
    }

    #[test]
    fn expense_table_includes_share_column() {
        let ledger = sample();
        let table = items_table(&ledger, Variant::Expense, "$", true).unwrap();
        let expected = [
            " ID      Description       Value   Share",
            "-----------------------------------------",
            " exp-0   Rent          - 67.00 $     34%",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn income_table_has_three_columns() {
        let ledger = sample();
        let table = items_table(&ledger, Variant::Income, "€", true).unwrap();
        assert!(table.lines().next().unwrap().ends_with("Value"));
        assert!(table.contains(" inc-0   Salary"));
        assert!(table.contains("+ 200.00 €"));
    }

    #[test]
    fn summary_entries_follow_display_rules() {
        let summary = sample().summary();
        let entries = summary_entries(&summary, "$");
        assert_eq!(entries[0], ("Available budget", "+ 133.00 $".to_string()));
        assert_eq!(entries[1].1, "+ 200.00 $");
        assert_eq!(entries[2].1, "- 67.00 $");
        assert_eq!(entries[3].1, "34%");

        let empty = summary_entries(&Summary::default(), "$");
        assert_eq!(empty[0].1, "- 0.00 $");
        assert_eq!(empty[3].1, "---");
    }

    #[test]
    fn percentages_line_lists_each_expense() {
        let mut ledger = sample();
        ledger.add_item(Variant::Expense, "Snacks", 0.5);
        ledger.refresh();
        assert_eq!(
            percentages_line(&ledger).unwrap(),
            "exp-0 34%, exp-1 ---"
        );
    }
}
