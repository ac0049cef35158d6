use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two kinds of line item a ledger tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Income,
    Expense,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Income, Variant::Expense];

    /// Short tag used in item handles such as `exp-3`.
    pub fn tag(self) -> &'static str {
        match self {
            Variant::Income => "inc",
            Variant::Expense => "exp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Income => "Income",
            Variant::Expense => "Expenses",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item type `{0}` (expected `inc` or `exp`)")]
pub struct ParseVariantError(pub String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "inc" | "income" | "+" => Ok(Variant::Income),
            "exp" | "expense" | "expenses" | "-" => Ok(Variant::Expense),
            _ => Err(ParseVariantError(input.to_string())),
        }
    }
}

/// Share of total income, rounded to a whole number.
///
/// `Undefined` stands in for "not computable" (no income yet) and is
/// distinct from a computed 0%. Serialized as an integer with `-1` for
/// the undefined case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Percentage {
    #[default]
    Undefined,
    Whole(u32),
}

impl Percentage {
    /// Marker value used by the serialized form.
    pub const SENTINEL: i64 = -1;

    /// `round(part / whole * 100)`, or `Undefined` when `whole` is not positive.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole > 0.0 {
            // f64::round rounds half away from zero, so 33.5 becomes 34.
            let rounded = ((part / whole) * 100.0).round();
            Percentage::Whole(rounded.max(0.0) as u32)
        } else {
            Percentage::Undefined
        }
    }

    pub fn value(self) -> Option<u32> {
        match self {
            Percentage::Undefined => None,
            Percentage::Whole(value) => Some(value),
        }
    }

    pub fn as_sentinel(self) -> i64 {
        self.into()
    }
}

impl From<i64> for Percentage {
    fn from(raw: i64) -> Self {
        if raw < 0 {
            Percentage::Undefined
        } else {
            Percentage::Whole(u32::try_from(raw).unwrap_or(u32::MAX))
        }
    }
}

impl From<Percentage> for i64 {
    fn from(percentage: Percentage) -> Self {
        match percentage {
            Percentage::Undefined => Percentage::SENTINEL,
            Percentage::Whole(value) => i64::from(value),
        }
    }
}

/// A single income or expense entry.
///
/// Only expenses carry a percentage; it is derived state that is refreshed
/// by [`Ledger::recompute_percentages`](super::Ledger::recompute_percentages).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub id: u64,
    #[serde(skip)]
    pub variant: Variant,
    pub description: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Percentage>,
}

impl LineItem {
    pub fn new(variant: Variant, id: u64, description: impl Into<String>, value: f64) -> Self {
        let percentage = match variant {
            Variant::Income => None,
            Variant::Expense => Some(Percentage::Undefined),
        };
        Self {
            id,
            variant,
            description: description.into(),
            value,
            percentage,
        }
    }

    /// Stable reference such as `inc-0` used by the shell's `delete` command.
    pub fn handle(&self) -> String {
        format!("{}-{}", self.variant.tag(), self.id)
    }

    pub(crate) fn calc_percentage(&mut self, total_income: f64) {
        if self.variant == Variant::Expense {
            self.percentage = Some(Percentage::of(self.value, total_income));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parses_short_and_long_forms() {
        assert_eq!("inc".parse::<Variant>().unwrap(), Variant::Income);
        assert_eq!("Expense".parse::<Variant>().unwrap(), Variant::Expense);
        assert_eq!(" EXP ".parse::<Variant>().unwrap(), Variant::Expense);
        let err = "savings".parse::<Variant>().unwrap_err();
        assert!(err.to_string().contains("savings"));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(Percentage::of(67.0, 200.0), Percentage::Whole(34));
        assert_eq!(Percentage::of(1.0, 3.0), Percentage::Whole(33));
        assert_eq!(Percentage::of(300.0, 200.0), Percentage::Whole(150));
    }

    #[test]
    fn percentage_is_undefined_without_income() {
        assert_eq!(Percentage::of(50.0, 0.0), Percentage::Undefined);
        assert_eq!(Percentage::Undefined.as_sentinel(), -1);
        assert_ne!(Percentage::Whole(0), Percentage::Undefined);
    }

    #[test]
    fn percentage_serializes_as_sentinel_integer() {
        let json = serde_json::to_string(&[Percentage::Undefined, Percentage::Whole(12)]).unwrap();
        assert_eq!(json, "[-1,12]");
        let back: Vec<Percentage> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Percentage::Undefined, Percentage::Whole(12)]);
    }

    #[test]
    fn only_expenses_carry_a_percentage() {
        let income = LineItem::new(Variant::Income, 0, "Salary", 1000.0);
        let expense = LineItem::new(Variant::Expense, 4, "Rent", 400.0);
        assert_eq!(income.percentage, None);
        assert_eq!(expense.percentage, Some(Percentage::Undefined));
        assert_eq!(expense.handle(), "exp-4");

        let json = serde_json::to_value(&income).unwrap();
        assert!(json.get("percentage").is_none());
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["percentage"], -1);
    }
}
