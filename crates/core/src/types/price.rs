//! Type-safe price representation using decimal arithmetic.
//!
//! The server stores prices as floating point numbers and returns them as JSON
//! numbers (`9.99`, `10.0`, `1e30`). Parsing goes through the number's shortest
//! textual form so no binary rounding noise leaks into the displayed value.
//! Numbers outside the range of [`Decimal`] are kept as the server sent them.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price '{0}'")]
    Invalid(String),
}

/// A product price in the store's single currency.
///
/// Displayed in normalized form: trailing zeros are dropped, so a server value
/// of `10.0` renders as `10` and `9.90` as `9.9`. A number too large for
/// decimal arithmetic renders in exponent form, e.g. `1e+30`.
///
/// ```
/// use shopfront_core::Price;
///
/// let price: Price = serde_json::from_str("9.99").unwrap();
/// assert_eq!(price.to_string(), "9.99");
///
/// let price: Price = serde_json::from_str("10.0").unwrap();
/// assert_eq!(price.to_string(), "10");
///
/// let price: Price = serde_json::from_str("1e30").unwrap();
/// assert_eq!(price.to_string(), "1e+30");
/// assert_eq!(price.amount(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price(Repr);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    Exact(Decimal),
    /// Server number text that does not fit in a `Decimal`.
    Verbatim(String),
}

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self(Repr::Exact(amount.normalize()))
    }

    /// Get the decimal amount, if the value fits in one.
    #[must_use]
    pub const fn amount(&self) -> Option<Decimal> {
        match &self.0 {
            Repr::Exact(amount) => Some(*amount),
            Repr::Verbatim(_) => None,
        }
    }

    /// Build a price from a JSON number's text. Never fails.
    fn from_number(text: &str) -> Self {
        text.parse()
            .unwrap_or_else(|_| Self(Repr::Verbatim(exponent_with_sign(text))))
    }
}

/// Spell exponents with an explicit sign (`1e30` becomes `1e+30`).
fn exponent_with_sign(text: &str) -> String {
    match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) if !exponent.starts_with(['+', '-']) => {
            format!("{mantissa}e+{exponent}")
        }
        Some((mantissa, exponent)) => format!("{mantissa}e{exponent}"),
        None => text.to_owned(),
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Exact(amount) => write!(f, "{amount}"),
            Repr::Verbatim(text) => f.write_str(text),
        }
    }
}

impl FromStr for Price {
    type Err = PriceError;

    /// Accepts plain (`9.99`) and scientific (`1e17`) notation within the
    /// range of [`Decimal`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s.trim())
            .map(Self::new)
            .ok_or_else(|| PriceError::Invalid(s.to_owned()))
    }
}

/// Plain or scientific notation. Exponents beyond the 28 digits a `Decimal`
/// can hold are rejected up front.
fn parse_decimal(text: &str) -> Option<Decimal> {
    if let Ok(amount) = Decimal::from_str(text) {
        return Some(amount);
    }

    let (_, exponent) = text.split_once(['e', 'E'])?;
    let exponent: i32 = exponent.parse().ok()?;
    if exponent.unsigned_abs() > 28 {
        return None;
    }
    Decimal::from_scientific(text).ok()
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Repr::Exact(amount) => rust_decimal::serde::str::serialize(amount, serializer),
            Repr::Verbatim(text) => serializer.serialize_str(text),
        }
    }
}

/// Wire forms the server may use for a price.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    /// Any JSON number is accepted. Strings must hold a decimal number.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(number) => Ok(Self::from_number(&number.to_string())),
            RawPrice::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
