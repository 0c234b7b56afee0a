//! FIFO queue of resting orders sharing one price
//!
//! Time priority falls out of the queue discipline: arrivals go to the
//! back, fills consume from the front, and nothing is ever re-sorted.
//! An entry leaves the queue exactly when its remaining amount reaches
//! zero, so every entry present holds a positive amount.

use std::collections::VecDeque;
use types::ids::UserId;
use types::numeric::Quantity;

/// All resting orders at one price on one side
///
/// Tracks a running total so depth queries do not walk the queue.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    orders: VecDeque<RestingOrder>,
    total_quantity: Quantity,
}

/// What the book needs to keep per resting order: who placed it and how
/// much is still open. Price lives in the level key, side in which book
/// holds the level.
#[derive(Debug, Clone)]
struct RestingOrder {
    user_id: UserId,
    remaining: Quantity,
}

impl PriceLevel {
    /// Create an empty level
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resting order behind all earlier arrivals
    pub fn insert(&mut self, user_id: UserId, quantity: Quantity) {
        self.orders.push_back(RestingOrder {
            user_id,
            remaining: quantity,
        });
        self.total_quantity += quantity;
    }

    /// The order next in line to fill, as (user_id, remaining)
    pub fn peek_front(&self) -> Option<(UserId, Quantity)> {
        self.orders.front().map(|order| (order.user_id, order.remaining))
    }

    /// Set the front order's remaining amount after a fill
    ///
    /// A zero amount pops the entry, promoting the next arrival. Returns
    /// false if the level has no front order to update.
    pub fn update_front_quantity(&mut self, new_quantity: Quantity) -> bool {
        let Some(order) = self.orders.front_mut() else {
            return false;
        };

        self.total_quantity = self.total_quantity - order.remaining + new_quantity;
        if new_quantity.is_zero() {
            self.orders.pop_front();
        } else {
            order.remaining = new_quantity;
        }
        true
    }

    /// Visit the resting orders front (oldest) to back
    pub fn iter(&self) -> impl Iterator<Item = (UserId, Quantity)> + '_ {
        self.orders.iter().map(|order| (order.user_id, order.remaining))
    }

    /// True when no orders rest here
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Sum of all remaining amounts at this price
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Number of resting orders at this price
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
