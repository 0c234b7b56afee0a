//! Settlement of decided matches
//!
//! Builds the trade record and the four balance adjustments behind it

use types::balance::BalanceChange;
use types::ids::{CurrencyPair, UserId};
use types::numeric::{Price, Quantity};
use types::trade::Trade;

/// Match executor for trade generation and settlement
///
/// Holds the traded pair so every emitted balance change carries the
/// right currency codes. Buyer and seller may be the same user; the
/// changes then apply to one account and cancel out up to truncation.
#[derive(Clone)]
pub struct MatchExecutor {
    pair: CurrencyPair,
}

impl MatchExecutor {
    /// Create a new match executor for a currency pair
    pub fn new(pair: CurrencyPair) -> Self {
        Self { pair }
    }

    /// The pair this executor settles in
    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    /// Execute a trade between a buyer and a seller
    ///
    /// `rate` is the resting order's price. Returns the trade record and
    /// its four balance changes: buyer pays quote and receives base,
    /// seller receives quote and pays base.
    pub fn execute_trade(
        &self,
        buyer_id: UserId,
        seller_id: UserId,
        amount: Quantity,
        rate: Price,
    ) -> (Trade, Vec<BalanceChange>) {
        let trade = Trade::new(buyer_id, seller_id, amount, rate);
        let changes = self.settlement_changes(&trade);
        (trade, changes)
    }

    /// Settlement deltas for one trade
    ///
    /// The quote leg divides base amount by rate with truncation, so the
    /// quote legs can sum to less than the trade's full value; the base
    /// legs are always exact opposites.
    fn settlement_changes(&self, trade: &Trade) -> Vec<BalanceChange> {
        let (base, quote) = self.pair.split();
        let quote_amount = trade.quote_value();
        let base_amount = trade.amount.as_i64();

        vec![
            BalanceChange::new(trade.buyer_id, -quote_amount, quote),
            BalanceChange::new(trade.buyer_id, base_amount, base),
            BalanceChange::new(trade.seller_id, quote_amount, quote),
            BalanceChange::new(trade.seller_id, -base_amount, base),
        ]
    }
}
