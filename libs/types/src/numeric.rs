//! Integer money types for prices and quantities
//!
//! All amounts are whole base-currency units and all prices are whole
//! base-per-quote exchange rates, carried as `i64`. Converting a base
//! amount into quote currency divides by the rate with truncation:
//! sub-unit remainders are dropped, never rounded or carried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Exchange rate in base-currency units per one quote unit
///
/// Expected to be positive; callers constructing orders enforce that
/// before the engine ever sees a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create from a raw integer rate
    pub fn new(rate: i64) -> Self {
        Self(rate)
    }

    /// Get the raw integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for Price {
    fn from(rate: i64) -> Self {
        Self(rate)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Base-currency amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Create from a raw integer amount
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(0)
    }

    /// Check whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Get the raw integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Quote-currency value of this base amount at the given rate
    ///
    /// Integer division truncates toward zero: `Quantity(100)` at rate 46
    /// is worth 2 quote units, with the 8-unit remainder dropped.
    pub fn quote_value(&self, rate: Price) -> i64 {
        self.0 / rate.as_i64()
    }
}

impl From<i64> for Quantity {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Quantity) -> Quantity {
        Quantity(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Quantity) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
