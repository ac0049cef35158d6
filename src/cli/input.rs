//! Validation of user-entered items before they reach the ledger.

use thiserror::Error;

use crate::ledger::{ParseVariantError, Variant};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error(transparent)]
    UnknownVariant(#[from] ParseVariantError),
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("value must be a positive amount, got {0}")]
    NotPositive(f64),
    #[error("`{0}` is not an item reference (use e.g. `exp-3`)")]
    BadHandle(String),
}

/// An item that passed validation and may be forwarded to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInput {
    pub variant: Variant,
    pub description: String,
    pub value: f64,
}

impl ItemInput {
    pub fn parse(variant: &str, description: &str, value: &str) -> Result<Self, InputError> {
        let variant: Variant = variant.parse()?;
        if description.trim().is_empty() {
            return Err(InputError::EmptyDescription);
        }
        let value = parse_value(value)?;
        Ok(Self {
            variant,
            description: description.to_string(),
            value,
        })
    }
}

fn parse_value(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive(value));
    }
    Ok(value)
}

/// Parses `exp-3`, or the split form `exp 3`, into a variant and id.
pub fn parse_handle(args: &[&str]) -> Result<(Variant, u64), InputError> {
    let joined = args.join("-");
    let (variant, id) = joined
        .split_once('-')
        .ok_or_else(|| InputError::BadHandle(joined.clone()))?;
    let variant: Variant = variant.parse()?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| InputError::BadHandle(joined.clone()))?;
    Ok((variant, id))
}
