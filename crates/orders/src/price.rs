//! Comma-decimal money totals.
//!
//! Totals are displayed and stored the way a European locale writes them
//! (`"34,82"`), but all arithmetic happens on `Decimal` values so repeated
//! increases and decreases never drift.

use core::str::FromStr;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, ValueObject};

/// Fractional digits kept in a total.
const DECIMAL_PLACES: u32 = 2;

/// Running or persisted order total, always held at two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TotalPrice(Decimal);

impl TotalPrice {
    pub const ZERO: TotalPrice = TotalPrice(Decimal::ZERO);

    /// Round `value` to cents, midpoint away from zero.
    pub fn new(value: Decimal) -> Self {
        let rounded =
            value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            // "-0,00" is not a total anyone wants to see.
            Self(Decimal::ZERO)
        } else {
            Self(rounded)
        }
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Parse a total written with either `,` or `.` as decimal separator.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let normalized = raw.trim().replacen(',', ".", 1);
        let value = Decimal::from_str(&normalized)
            .map_err(|e| DomainError::validation(format!("total price '{raw}': {e}")))?;
        Ok(Self::new(value))
    }

    /// New total after applying `operation` with `amount`, or `None` when
    /// the result is out of `Decimal` range.
    pub fn apply(self, operation: PriceOperation, amount: Decimal) -> Option<Self> {
        let value = match operation {
            PriceOperation::Increase => self.0.checked_add(amount),
            PriceOperation::Decrease => self.0.checked_sub(amount),
        }?;
        Some(Self::new(value))
    }
}

impl ValueObject for TotalPrice {}

impl core::fmt::Display for TotalPrice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = format!("{:.prec$}", self.0, prec = DECIMAL_PLACES as usize);
        f.write_str(&text.replacen('.', ",", 1))
    }
}

impl FromStr for TotalPrice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TotalPrice {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TotalPrice> for String {
    fn from(value: TotalPrice) -> Self {
        value.to_string()
    }
}

/// Direction of a total update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceOperation {
    Increase,
    Decrease,
}

impl PriceOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceOperation::Increase => "increase",
            PriceOperation::Decrease => "decrease",
        }
    }
}

impl FromStr for PriceOperation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increase" => Ok(PriceOperation::Increase),
            "decrease" => Ok(PriceOperation::Decrease),
            other => Err(DomainError::validation(format!(
                "unknown price operation '{other}'"
            ))),
        }
    }
}

/// Apply an `increase`/`decrease` token to `target`.
///
/// Unknown tokens and results out of range are reported on the warning
/// channel and leave `target` untouched. Returns `false` in those cases.
pub fn update_total_price(target: &mut TotalPrice, amount: Decimal, operation: &str) -> bool {
    let Ok(op) = operation.parse::<PriceOperation>() else {
        tracing::warn!(operation, "update_total_price: unknown operation");
        return false;
    };
    match target.apply(op, amount) {
        Some(updated) => {
            *target = updated;
            true
        }
        None => {
            tracing::warn!(
                operation,
                %amount,
                total = %target,
                "update_total_price: result out of range"
            );
            false
        }
    }
}
