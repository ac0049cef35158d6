use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item::{LineItem, Percentage, Variant};

/// How a ledger hands out ids to new items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Last id in the variant's sequence plus one, or 0 when empty.
    /// Deleting the tail item lets its id be handed out again.
    #[default]
    FollowLast,
    /// A per-variant counter that never goes backwards.
    Monotonic,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::FollowLast => f.write_str("follow_last"),
            IdPolicy::Monotonic => f.write_str("monotonic"),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "follow_last" | "last" => Ok(IdPolicy::FollowLast),
            "monotonic" | "counter" => Ok(IdPolicy::Monotonic),
            other => Err(format!(
                "unknown id policy `{other}` (expected `follow_last` or `monotonic`)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

/// Derived figures reported after a totals recompute.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub budget: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub overall_percentage: Percentage,
}

#[derive(Debug, Clone, Copy, Default)]
struct Counters {
    income: u64,
    expense: u64,
}

impl Counters {
    fn slot(&mut self, variant: Variant) -> &mut u64 {
        match variant {
            Variant::Income => &mut self.income,
            Variant::Expense => &mut self.expense,
        }
    }
}

/// In-memory store of income and expense items with recompute-on-demand totals.
///
/// Mutations never touch the derived figures; call [`Ledger::refresh`] (or the
/// two recompute steps in order) before reading [`Ledger::summary`] or
/// [`Ledger::percentages`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    income: Vec<LineItem>,
    expenses: Vec<LineItem>,
    totals: Totals,
    budget: f64,
    overall_percentage: Percentage,
    #[serde(skip)]
    id_policy: IdPolicy,
    #[serde(skip)]
    counters: Counters,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_policy(id_policy: IdPolicy) -> Self {
        Self {
            id_policy,
            ..Self::default()
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn items(&self, variant: Variant) -> &[LineItem] {
        match variant {
            Variant::Income => &self.income,
            Variant::Expense => &self.expenses,
        }
    }

    fn items_mut(&mut self, variant: Variant) -> &mut Vec<LineItem> {
        match variant {
            Variant::Income => &mut self.income,
            Variant::Expense => &mut self.expenses,
        }
    }

    pub fn item(&self, variant: Variant, id: u64) -> Option<&LineItem> {
        self.items(variant).iter().find(|item| item.id == id)
    }

    pub fn len(&self, variant: Variant) -> usize {
        self.items(variant).len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    fn next_id(&mut self, variant: Variant) -> u64 {
        match self.id_policy {
            IdPolicy::FollowLast => self
                .items(variant)
                .last()
                .map(|item| item.id + 1)
                .unwrap_or(0),
            IdPolicy::Monotonic => {
                let slot = self.counters.slot(variant);
                let id = *slot;
                *slot += 1;
                id
            }
        }
    }

    /// Appends a new item and returns a copy of it.
    ///
    /// Input is assumed valid (non-empty description, positive value); the
    /// caller filters bad input before it reaches the ledger.
    pub fn add_item(
        &mut self,
        variant: Variant,
        description: impl Into<String>,
        value: f64,
    ) -> LineItem {
        let id = self.next_id(variant);
        let item = LineItem::new(variant, id, description, value);
        debug!(handle = %item.handle(), value, "adding ledger item");
        self.items_mut(variant).push(item.clone());
        item
    }

    /// Removes the item with `id`; an unknown id is a no-op.
    pub fn delete_item(&mut self, variant: Variant, id: u64) -> Option<LineItem> {
        let items = self.items_mut(variant);
        let position = items.iter().position(|item| item.id == id);
        match position {
            Some(index) => {
                let removed = items.remove(index);
                debug!(handle = %removed.handle(), "deleted ledger item");
                Some(removed)
            }
            None => {
                debug!(%variant, id, "delete ignored, no such item");
                None
            }
        }
    }

    /// Drops every item and resets derived figures and id counters.
    pub fn clear(&mut self) {
        *self = Self::with_id_policy(self.id_policy);
    }

    /// Recomputes totals, budget, and the overall percentage from the current items.
    pub fn recompute_totals(&mut self) {
        let income = sum(&self.income);
        let expense = sum(&self.expenses);
        self.totals = Totals { income, expense };
        self.budget = income - expense;
        self.overall_percentage = Percentage::of(expense, income);
    }

    /// Recomputes each expense's share of the last computed income total.
    pub fn recompute_percentages(&mut self) {
        let total_income = self.totals.income;
        for item in &mut self.expenses {
            item.calc_percentage(total_income);
        }
    }

    /// Runs both recompute steps in the order they depend on each other.
    pub fn refresh(&mut self) -> Summary {
        self.recompute_totals();
        self.recompute_percentages();
        self.summary()
    }

    /// Expense percentages as of the last recompute, in expense order.
    pub fn percentages(&self) -> Vec<Percentage> {
        self.expenses
            .iter()
            .map(|item| item.percentage.unwrap_or_default())
            .collect()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn summary(&self) -> Summary {
        Summary {
            budget: self.budget,
            total_income: self.totals.income,
            total_expense: self.totals.expense,
            overall_percentage: self.overall_percentage,
        }
    }
}

fn sum(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.value).sum()
}
