//! Exact prices.
//!
//! Prices are held in minor units (øre) so that subtotals and cart totals add
//! up without floating-point drift. On the wire they are plain decimal
//! numbers, which is what the product API sends and what the persisted cart
//! record stores.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Largest amount a `Price` holds, in øre (just under 1 000 000 000 000 kr.).
///
/// Every amount up to this bound survives a trip through a JSON decimal
/// number unchanged.
pub const MAX_MINOR_UNITS: i64 = 99_999_999_999_999;

/// A non-negative amount of Danish kroner, stored in øre, never above
/// `MAX_MINOR_UNITS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// Zero kroner.
    pub const ZERO: Self = Self(0);

    /// The largest representable price.
    pub const MAX: Self = Self(MAX_MINOR_UNITS);

    /// Builds a price from øre.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for negative amounts or amounts
    /// above `MAX_MINOR_UNITS`.
    pub fn from_minor_units(ore: i64) -> Result<Self, DomainError> {
        if ore < 0 {
            return Err(DomainError::Validation(format!(
                "price must not be negative, got {ore} øre"
            )));
        }
        if ore > MAX_MINOR_UNITS {
            return Err(DomainError::Validation(format!(
                "price {ore} øre is out of range"
            )));
        }
        Ok(Self(ore))
    }

    /// Builds a price from whole kroner.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for negative amounts or overflow.
    pub fn from_kroner(kroner: i64) -> Result<Self, DomainError> {
        let ore = kroner
            .checked_mul(100)
            .ok_or_else(|| DomainError::Validation(format!("price {kroner} is out of range")))?;
        Self::from_minor_units(ore)
    }

    /// Parses a decimal amount of kroner, rounding to the nearest øre.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for negative, non-finite or
    /// out-of-range amounts.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_decimal(kroner: f64) -> Result<Self, DomainError> {
        let ore = (kroner * 100.0).round();
        if !ore.is_finite() || ore < 0.0 || ore > MAX_MINOR_UNITS as f64 {
            return Err(DomainError::Validation(format!(
                "price must be a non-negative amount up to {}, got {kroner}",
                Self::MAX
            )));
        }
        Ok(Self(ore as i64))
    }

    /// Returns the amount in øre.
    #[must_use]
    pub fn minor_units(self) -> i64 {
        self.0
    }

    /// Returns `self × quantity`, or `None` above `Price::MAX`.
    #[must_use]
    pub fn checked_times(self, quantity: u32) -> Option<Self> {
        self.0
            .checked_mul(i64::from(quantity))
            .filter(|ore| *ore <= MAX_MINOR_UNITS)
            .map(Self)
    }

    /// Returns `self + rhs`, or `None` above `Price::MAX`.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0
            .checked_add(rhs.0)
            .filter(|ore| *ore <= MAX_MINOR_UNITS)
            .map(Self)
    }

    /// Formats the price the way the storefront shows it: `1.500,00 kr.`
    #[must_use]
    pub fn format_dkk(self) -> String {
        let kroner = (self.0 / 100).to_string();
        let ore = self.0 % 100;

        let mut grouped = String::with_capacity(kroner.len() + kroner.len() / 3);
        for (i, digit) in kroner.chars().enumerate() {
            if i > 0 && (kroner.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        format!("{grouped},{ore:02} kr.")
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Saturates at `Price::MAX`; use `checked_add` where overflow must be
/// reported.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs).unwrap_or(Self::MAX)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_decimal())
        }
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative decimal amount")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        let kroner = i64::try_from(v).map_err(E::custom)?;
        Price::from_kroner(kroner).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        Price::from_kroner(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        Price::from_decimal(v).map_err(E::custom)
    }

    // The API occasionally sends prices as strings ("499.95").
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        let parsed: f64 = v
            .trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))?;
        Price::from_decimal(parsed).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}
