//! Price crossing predicate
//!
//! A buyer's limit is the most they will pay and a seller's limit the
//! least they will accept, so two orders trade exactly when the bid
//! reaches the ask. This is the whole match condition; quantities and
//! time priority are the book's concern.

use types::numeric::Price;
use types::order::Side;

/// True when a bid at `bid_price` trades against an ask at `ask_price`
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Match condition between an incoming order and a resting level
///
/// Orients the bid/ask comparison by the incoming side: an incoming buy
/// supplies the bid price, an incoming sell the ask price.
pub fn incoming_can_match(incoming_side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match incoming_side {
        Side::Buy => can_match(incoming_price, resting_price),
        Side::Sell => can_match(resting_price, incoming_price),
    }
}
