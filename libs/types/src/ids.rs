//! Identifier types for exchange entities
//!
//! User identities are caller-supplied integers: the engine never generates
//! identifiers and attaches no meaning to their values beyond equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the user who placed an order
///
/// Any `i64` is a valid identity, including zero and negative values.
/// Two orders belong to the same user exactly when their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create from a raw integer identity
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traded market (currency pair)
///
/// Format: "BASE/QUOTE" (e.g., "UAH/USD"). Order amounts are denominated in
/// the base currency; prices are base units per one quote unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyPair(String);

impl CurrencyPair {
    /// Build a pair from its symbol
    ///
    /// # Panics
    /// Panics unless the symbol is two non-empty codes joined by one '/'
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::try_new(symbol).expect("CurrencyPair must be in BASE/QUOTE format")
    }

    /// Build a pair from its symbol, `None` if the shape is wrong
    pub fn try_new(symbol: impl Into<String>) -> Option<Self> {
        let s = symbol.into();
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
                Some(Self(s))
            }
            _ => None,
        }
    }

    /// The full "BASE/QUOTE" symbol
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Both currency codes as (base, quote)
    pub fn split(&self) -> (&str, &str) {
        // construction guarantees the separator is present
        self.0
            .split_once('/')
            .expect("CurrencyPair symbol was validated on construction")
    }

    /// The currency order amounts are denominated in
    pub fn base(&self) -> &str {
        self.split().0
    }

    /// The currency prices are denominated in
    pub fn quote(&self) -> &str {
        self.split().1
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyPair {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_roundtrip() {
        let id = UserId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id, UserId::from(42));
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::new(7).to_string(), "7");
        assert_eq!(UserId::new(-3).to_string(), "-3");
    }

    #[test]
    fn test_user_id_serialization() {
        let id = UserId::new(15);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "15");

        let deserialized: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_currency_pair_creation() {
        let pair = CurrencyPair::new("UAH/USD");
        assert_eq!(pair.as_str(), "UAH/USD");
        assert_eq!(CurrencyPair::from("UAH/USD"), pair);

        let (base, quote) = pair.split();
        assert_eq!(base, "UAH");
        assert_eq!(quote, "USD");

        assert_eq!(pair.base(), "UAH");
        assert_eq!(pair.quote(), "USD");
    }

    #[test]
    fn test_currency_pair_try_new() {
        assert!(CurrencyPair::try_new("UAH/USD").is_some());
        assert!(CurrencyPair::try_new("BTC/USDT").is_some());
        assert!(CurrencyPair::try_new("INVALID").is_none());
        assert!(CurrencyPair::try_new("UAH/").is_none());
        assert!(CurrencyPair::try_new("/USD").is_none());
        assert!(CurrencyPair::try_new("A/B/C").is_none());
    }

    #[test]
    #[should_panic(expected = "CurrencyPair must be in BASE/QUOTE format")]
    fn test_currency_pair_invalid_format() {
        CurrencyPair::new("INVALID");
    }

    #[test]
    fn test_currency_pair_serialization() {
        let pair = CurrencyPair::new("UAH/USD");
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"UAH/USD\"");

        let deserialized: CurrencyPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
