//! Balance adjustment records
//!
//! Each trade settles as four balance changes (buyer and seller, quote and
//! base currency). They describe what an external ledger would apply; no
//! ledger exists here, so they are emitted for display and dropped.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed balance delta for one user in one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub user_id: UserId,
    /// Signed delta in whole currency units
    pub value: i64,
    /// Currency code (e.g. "UAH", "USD")
    pub currency: String,
}

impl BalanceChange {
    /// Create a new balance change
    pub fn new(user_id: UserId, value: i64, currency: impl Into<String>) -> Self {
        Self {
            user_id,
            value,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for BalanceChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BalanceChange{{user_id: {}, value: {}, currency: \"{}\"}}",
            self.user_id, self.value, self.currency
        )
    }
}
