//! Strongly-typed identifiers used across the domain.
//!
//! Resource ids are opaque strings (`order-001`, `product-014`,
//! `company-002`). Only order ids carry structure: a numeric suffix that
//! pairs with the order number.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an order resource (`order-NNN`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Identifier of a product resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a company resource (supplier or customer).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

/// Identifier of a user (actor identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

impl_string_newtype!(OrderId, "OrderId");
impl_string_newtype!(ProductId, "ProductId");
impl_string_newtype!(CompanyId, "CompanyId");
impl_string_newtype!(UserId, "UserId");

impl OrderId {
    /// Prefix every order id carries.
    pub const PREFIX: &'static str = "order-";

    /// Build `order-NNN` from a sequence value, zero-padded to three digits.
    ///
    /// Values past 999 widen instead of wrapping (`order-1000`).
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("{}{:03}", Self::PREFIX, sequence))
    }

    /// Numeric suffix of the id (`order-042` → `42`).
    pub fn sequence(&self) -> Result<u64, DomainError> {
        let suffix = self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0);
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "OrderId: '{}' has no numeric suffix",
                self.0
            )));
        }
        suffix
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("OrderId: '{}': {}", self.0, e)))
    }
}
