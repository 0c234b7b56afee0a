//! Order types
//!
//! An order has no explicit status field: it either rests in a book with a
//! positive amount or it is gone. Fill progress is tracked by decrementing
//! the amount, and removal happens exactly when the amount reaches zero.

use crate::ids::UserId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way an order trades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Bid side
    Buy,
    /// Ask side
    Sell,
}

impl Side {
    /// The side this order matches against
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// An order as submitted to the engine
///
/// `amount` is the base-currency quantity still to be exchanged; `price` is
/// the limit rate in base units per quote unit. Callers construct orders
/// from validated input, so `amount` and `price` are positive on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub user_id: UserId,
    pub amount: Quantity,
    pub price: Price,
    pub side: Side,
}

impl Order {
    /// Create a new order
    pub fn new(user_id: UserId, amount: Quantity, price: Price, side: Side) -> Self {
        Self {
            user_id,
            amount,
            price,
            side,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_oppose_each_other() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
        assert_eq!(Side::Buy.opposite().opposite(), Side::Buy);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Buy.to_string(), "BUY");
        assert_eq!(Side::Sell.to_string(), "SELL");
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"SELL\"");

        let side: Side = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(side, Side::Sell);
    }

    #[test]
    fn test_order_creation() {
        let order = Order::new(
            UserId::new(1),
            Quantity::new(100),
            Price::new(46),
            Side::Buy,
        );

        assert_eq!(order.user_id, UserId::new(1));
        assert_eq!(order.amount, Quantity::new(100));
        assert_eq!(order.price, Price::new(46));
        assert_eq!(order.side, Side::Buy);
    }

    #[test]
    fn test_order_json_round_trip() {
        let order = Order::new(
            UserId::new(2),
            Quantity::new(50),
            Price::new(46),
            Side::Sell,
        );

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"SELL\""));
        assert_eq!(serde_json::from_str::<Order>(&json).unwrap(), order);
    }
}
