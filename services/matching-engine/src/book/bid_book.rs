//! Buy-side book
//!
//! Levels are keyed by price in a BTreeMap, so the side is sorted at all
//! times and iteration is deterministic. For bids the best price is the
//! highest, which is the map's last key; best-first walks therefore run
//! in reverse key order.

use std::collections::BTreeMap;
use types::ids::UserId;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Resting buy orders, one FIFO level per distinct price
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create an empty bid book
    pub fn new() -> Self {
        Self::default()
    }

    /// Rest an order at its price, behind earlier arrivals at that price
    pub fn insert(&mut self, order: &Order) {
        self.levels
            .entry(order.price)
            .or_default()
            .insert(order.user_id, order.amount);
    }

    /// Highest-priced level as (price, level total quantity)
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.levels
            .last_key_value()
            .map(|(price, level)| (*price, level.total_quantity()))
    }

    /// Price of the highest bid
    pub fn best_bid_price(&self) -> Option<Price> {
        self.levels.last_key_value().map(|(price, _)| *price)
    }

    /// Snapshot of the level prices, highest first
    ///
    /// The submit loop walks this snapshot so it can mutate levels while
    /// scanning without holding a borrow of the map.
    pub fn prices(&self) -> Vec<Price> {
        self.levels.keys().rev().copied().collect()
    }

    /// Mutable access to the level resting at exactly `price`
    pub fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Discard the level at `price`
    ///
    /// The book never keeps a level around once its last order fills.
    pub fn remove_level(&mut self, price: Price) {
        self.levels.remove(&price);
    }

    /// Visit every resting bid, best price first, oldest first per price
    pub fn orders(&self) -> impl Iterator<Item = (UserId, Quantity, Price)> + '_ {
        self.levels.iter().rev().flat_map(|(price, level)| {
            level.iter().map(move |(user_id, quantity)| (user_id, quantity, *price))
        })
    }

    /// True when no bids rest
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of distinct prices with resting bids
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
