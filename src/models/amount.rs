//! Amount type for expense values
//!
//! The ledger stores amounts as text exactly as they were entered, so an
//! `Amount` keeps both the parsed floating-point value used for arithmetic and
//! the trimmed text written back to disk.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A parsed expense amount together with its stored text form
#[derive(Debug, Clone)]
pub struct Amount {
    value: f64,
    text: String,
}

impl Amount {
    /// Parse an amount from user or file input
    ///
    /// Surrounding whitespace is ignored. Accepts anything `f64` parses that is
    /// finite: "10", "10.50", "-3", "1e3".
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Amount;
    /// let amount = Amount::parse("23.40").unwrap();
    /// assert_eq!(amount.value(), 23.4);
    /// assert_eq!(amount.to_string(), "23.40");
    /// ```
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let text = s.trim();
        let value: f64 = text
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(s.to_string()));
        }

        Ok(Self {
            value,
            text: text.to_string(),
        })
    }

    /// Create an amount from a value, stored with two decimals
    pub fn from_value(value: f64) -> Self {
        Self {
            value,
            text: format!("{:.2}", value),
        }
    }

    /// The parsed value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The text form written to the ledger
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.value < 0.0 {
            format!("-{}{:.2}", symbol, -self.value)
        } else {
            format!("{}{:.2}", symbol, self.value)
        }
    }
}

/// Amounts compare by value, so "10" and "10.00" are equal
impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Amount::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
    NotFinite(String),
}

impl AmountParseError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat(s) | Self::NotFinite(s) => s,
        }
    }
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            Self::NotFinite(s) => write!(f, "Amount is not a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
