use budgety::ledger::{IdPolicy, Ledger, Percentage, Summary, Variant};

fn ids(ledger: &Ledger, variant: Variant) -> Vec<u64> {
    ledger.items(variant).iter().map(|item| item.id).collect()
}

#[test]
fn ids_follow_last_item_per_variant() {
    let mut ledger = Ledger::new();
    for value in [10.0, 20.0, 30.0] {
        let expected = ledger.items(Variant::Income).last().map_or(0, |item| item.id + 1);
        let item = ledger.add_item(Variant::Income, "Pay", value);
        assert_eq!(item.id, expected);
    }
    let first_expense = ledger.add_item(Variant::Expense, "Rent", 5.0);
    assert_eq!(first_expense.id, 0);
    assert_eq!(ids(&ledger, Variant::Income), vec![0, 1, 2]);
}

#[test]
fn totals_and_budget_from_items() {
    let mut ledger = Ledger::new();
    ledger.add_item(Variant::Income, "Salary", 100.0);
    ledger.add_item(Variant::Income, "Bonus", 200.0);
    ledger.add_item(Variant::Expense, "Rent", 50.0);
    ledger.recompute_totals();

    let totals = ledger.totals();
    assert_eq!(totals.income, 300.0);
    assert_eq!(totals.expense, 50.0);
    assert_eq!(ledger.summary().budget, 250.0);
    assert_eq!(ledger.summary().overall_percentage, Percentage::Whole(17));
}

#[test]
fn zero_income_yields_undefined_everywhere() {
    let mut ledger = Ledger::new();
    ledger.add_item(Variant::Expense, "Rent", 50.0);
    ledger.add_item(Variant::Expense, "Food", 20.0);
    let summary = ledger.refresh();

    assert_eq!(summary.overall_percentage, Percentage::Undefined);
    assert_eq!(summary.overall_percentage.as_sentinel(), -1);
    assert_eq!(summary.budget, -70.0);
    assert!(ledger
        .percentages()
        .iter()
        .all(|p| *p == Percentage::Undefined));
}

#[test]
fn half_percent_rounds_up() {
    let mut ledger = Ledger::new();
    ledger.add_item(Variant::Income, "Salary", 200.0);
    ledger.add_item(Variant::Expense, "Rent", 67.0);
    ledger.recompute_totals();
    ledger.recompute_percentages();

    assert_eq!(ledger.percentages(), vec![Percentage::Whole(34)]);
    assert_eq!(ledger.summary().overall_percentage, Percentage::Whole(34));
}

#[test]
fn deleting_missing_id_changes_nothing() {
    let mut ledger = Ledger::new();
    ledger.add_item(Variant::Expense, "Rent", 50.0);
    ledger.add_item(Variant::Expense, "Food", 20.0);
    let before = ledger.items(Variant::Expense).to_vec();

    assert!(ledger.delete_item(Variant::Expense, 7).is_none());
    assert!(ledger.delete_item(Variant::Income, 0).is_none());
    assert_eq!(ledger.items(Variant::Expense), before.as_slice());
}

#[test]
fn follow_last_recycles_only_the_tail_id() {
    let mut ledger = Ledger::new();
    for name in ["A", "B", "C"] {
        ledger.add_item(Variant::Income, name, 1.0);
    }

    ledger.delete_item(Variant::Income, 2);
    assert_eq!(ledger.add_item(Variant::Income, "D", 1.0).id, 2);

    ledger.delete_item(Variant::Income, 0);
    assert_eq!(ledger.add_item(Variant::Income, "E", 1.0).id, 3);
    assert_eq!(ids(&ledger, Variant::Income), vec![1, 2, 3]);
}

#[test]
fn monotonic_policy_never_reuses_ids() {
    let mut ledger = Ledger::with_id_policy(IdPolicy::Monotonic);
    ledger.add_item(Variant::Expense, "A", 1.0);
    ledger.add_item(Variant::Expense, "B", 1.0);
    ledger.delete_item(Variant::Expense, 1);
    ledger.delete_item(Variant::Expense, 0);

    assert_eq!(ledger.add_item(Variant::Expense, "C", 1.0).id, 2);
    assert_eq!(ledger.add_item(Variant::Income, "D", 1.0).id, 0);
}

#[test]
fn summary_is_stale_until_recomputed() {
    let mut ledger = Ledger::new();
    ledger.add_item(Variant::Income, "Salary", 100.0);
    assert_eq!(ledger.summary(), Summary::default());

    ledger.recompute_totals();
    let after_totals = ledger.summary();
    ledger.recompute_percentages();
    assert_eq!(ledger.summary(), after_totals);
    assert_eq!(after_totals.total_income, 100.0);
}

#[test]
fn percentages_reflect_last_recompute_only() {
    let mut ledger = Ledger::new();
    ledger.add_item(Variant::Income, "Salary", 100.0);
    ledger.add_item(Variant::Expense, "Rent", 25.0);
    ledger.refresh();
    assert_eq!(ledger.percentages(), vec![Percentage::Whole(25)]);

    ledger.add_item(Variant::Income, "Bonus", 100.0);
    assert_eq!(ledger.percentages(), vec![Percentage::Whole(25)]);

    ledger.refresh();
    assert_eq!(ledger.percentages(), vec![Percentage::Whole(13)]);
}

#[test]
fn independent_ledgers_do_not_share_state() {
    let mut first = Ledger::new();
    let mut second = Ledger::new();
    first.add_item(Variant::Income, "Salary", 100.0);
    first.refresh();
    second.refresh();

    assert_eq!(first.summary().total_income, 100.0);
    assert_eq!(second.summary().total_income, 0.0);
    assert!(second.is_empty());
}
