//! Trade execution records
//!
//! A trade is ephemeral: the engine produces it, the caller displays it,
//! and nothing retains it. There is no settlement state or trade history.

use crate::ids::UserId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// One match between a buyer and a seller
///
/// `rate` is always the resting (earlier-placed) order's price, so the
/// incoming side never pays worse than it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub buyer_id: UserId,
    pub seller_id: UserId,
    /// Base-currency amount exchanged
    pub amount: Quantity,
    /// Execution rate in base units per quote unit
    pub rate: Price,
}

impl Trade {
    /// Create a new trade record
    pub fn new(buyer_id: UserId, seller_id: UserId, amount: Quantity, rate: Price) -> Self {
        Self {
            buyer_id,
            seller_id,
            amount,
            rate,
        }
    }

    /// Quote-currency value of the trade (truncating division)
    pub fn quote_value(&self) -> i64 {
        self.amount.quote_value(self.rate)
    }

    /// Check whether buyer and seller are the same user
    pub fn is_self_trade(&self) -> bool {
        self.buyer_id == self.seller_id
    }
}
