//! Engine facade
//!
//! Ties the two book sides to the executor and runs the submit loop.

use serde::{Deserialize, Serialize};

use types::balance::BalanceChange;
use types::ids::CurrencyPair;
use types::numeric::Quantity;
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook};
use crate::matching::{crossing, executor::MatchExecutor};

/// Main matching engine for one currency pair
///
/// Owns the bid and ask books and the trade executor. All submitted
/// orders trade against the same pair; the engine holds no other state.
#[derive(Clone)]
pub struct MatchingEngine {
    bids: BidBook,
    asks: AskBook,
    executor: MatchExecutor,
}

/// Everything one submission produced
///
/// `balance_changes` holds exactly four entries per trade, in trade
/// order, so chunk `i` of four settles `trades[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub trades: Vec<Trade>,
    pub balance_changes: Vec<BalanceChange>,
    pub outcome: SubmitOutcome,
}

/// What happened to the incoming order itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Fully consumed by matching; nothing entered the book
    Filled,
    /// Entered the book with this amount still open
    Rested { remaining: Quantity },
}

impl MatchingEngine {
    /// Create a new matching engine for a currency pair
    pub fn new(pair: CurrencyPair) -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            executor: MatchExecutor::new(pair),
        }
    }

    /// The pair this engine trades
    pub fn pair(&self) -> &CurrencyPair {
        self.executor.pair()
    }

    /// Resting buy orders
    pub fn bids(&self) -> &BidBook {
        &self.bids
    }

    /// Resting sell orders
    pub fn asks(&self) -> &AskBook {
        &self.asks
    }

    /// Match an order against the book, resting any remainder
    ///
    /// The single mutating entry point. The order fills against the
    /// opposite side first; whatever is left enters its own side.
    /// Assumes the caller validated `amount > 0` and `price > 0`. The
    /// engine never fails: there is no balance, overflow, or self-trade
    /// checking here.
    pub fn submit_order(&mut self, mut order: Order) -> SubmitResult {
        let mut trades = Vec::new();
        let mut balance_changes = Vec::new();

        match order.side {
            Side::Buy => self.match_buy_order(&mut order, &mut trades, &mut balance_changes),
            Side::Sell => self.match_sell_order(&mut order, &mut trades, &mut balance_changes),
        }

        let outcome = if order.amount.is_zero() {
            SubmitOutcome::Filled
        } else {
            match order.side {
                Side::Buy => self.bids.insert(&order),
                Side::Sell => self.asks.insert(&order),
            }
            SubmitOutcome::Rested {
                remaining: order.amount,
            }
        };

        SubmitResult {
            trades,
            balance_changes,
            outcome,
        }
    }

    /// Match an incoming buy order against the ask side
    ///
    /// Walks a snapshot of every ask level, best price first. Levels the
    /// buyer's limit does not reach are skipped, not a stopping
    /// condition; with the book sorted by construction this visits the
    /// same fills as stopping at the first non-cross.
    fn match_buy_order(
        &mut self,
        order: &mut Order,
        trades: &mut Vec<Trade>,
        balance_changes: &mut Vec<BalanceChange>,
    ) {
        let prices = self.asks.prices();
        let mut emptied = Vec::new();

        for level_price in prices {
            if order.amount.is_zero() {
                break;
            }
            if !crossing::incoming_can_match(Side::Buy, order.price, level_price) {
                continue;
            }

            if let Some(level) = self.asks.level_mut(level_price) {
                while !order.amount.is_zero() {
                    if let Some((maker_id, maker_quantity)) = level.peek_front() {
                        let traded = order.amount.min(maker_quantity);

                        // Incoming buy fills against a resting seller at
                        // the seller's price
                        let (trade, changes) = self.executor.execute_trade(
                            order.user_id,
                            maker_id,
                            traded,
                            level_price,
                        );
                        trades.push(trade);
                        balance_changes.extend(changes);

                        order.amount -= traded;
                        level.update_front_quantity(maker_quantity - traded);
                    } else {
                        break;
                    }
                }

                if level.is_empty() {
                    emptied.push(level_price);
                }
            }
        }

        for price in emptied {
            self.asks.remove_level(price);
        }
    }

    /// Match an incoming sell order against the bid side
    ///
    /// Mirror of `match_buy_order`: walks every bid level best (highest)
    /// first, skipping bids below the seller's floor.
    fn match_sell_order(
        &mut self,
        order: &mut Order,
        trades: &mut Vec<Trade>,
        balance_changes: &mut Vec<BalanceChange>,
    ) {
        let prices = self.bids.prices();
        let mut emptied = Vec::new();

        for level_price in prices {
            if order.amount.is_zero() {
                break;
            }
            if !crossing::incoming_can_match(Side::Sell, order.price, level_price) {
                continue;
            }

            if let Some(level) = self.bids.level_mut(level_price) {
                while !order.amount.is_zero() {
                    if let Some((maker_id, maker_quantity)) = level.peek_front() {
                        let traded = order.amount.min(maker_quantity);

                        // Incoming sell fills against a resting buyer at
                        // the buyer's price
                        let (trade, changes) = self.executor.execute_trade(
                            maker_id,
                            order.user_id,
                            traded,
                            level_price,
                        );
                        trades.push(trade);
                        balance_changes.extend(changes);

                        order.amount -= traded;
                        level.update_front_quantity(maker_quantity - traded);
                    } else {
                        break;
                    }
                }

                if level.is_empty() {
                    emptied.push(level_price);
                }
            }
        }

        for price in emptied {
            self.bids.remove_level(price);
        }
    }
}
