//! Output formatting
//!
//! All user-facing text for the session lives here. Formats are part of
//! the observable contract and covered by exact-string tests; change
//! them only together with the transcript tests.

use matching_engine::MatchingEngine;
use types::ids::{CurrencyPair, UserId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

/// Prompt printed before each read, without a trailing newline
pub const PROMPT: &str = "Enter order: ";

/// Header printed above each trade's four balance change lines
pub const BALANCE_CHANGES_HEADER: &str = "Balance Changes:";

/// Startup banner, ends in a blank line
pub fn banner(pair: &CurrencyPair) -> String {
    let (base, quote) = pair.split();
    format!(
        "{base}/{quote} Order Book\n\
         Enter orders: userId amount({base}) rate({base}/{quote}) buy|sell\n\
         Example: 1 100 46 buy means buy 100 {base} at rate 46 {base} per 1 {quote}\n\
         Type 'exit' to quit\n\n"
    )
}

/// Announcement line for an accepted order
pub fn processing_line(order: &Order, pair: &CurrencyPair) -> String {
    let (base, quote) = pair.split();
    format!(
        "Processing: User {user} wants to {side} {amount} {base} @ {price} {base}/{quote}",
        user = order.user_id,
        side = order.side,
        amount = order.amount,
        price = order.price,
    )
}

/// One line per executed trade, buyer first
pub fn matched_line(trade: &Trade, pair: &CurrencyPair) -> String {
    format!(
        "Matched {amount} {base} @ {rate} between User {buyer} and User {seller}",
        amount = trade.amount,
        base = pair.base(),
        rate = trade.rate,
        buyer = trade.buyer_id,
        seller = trade.seller_id,
    )
}

/// Notice that an unfilled remainder entered the book
pub fn remaining_line(remaining: Quantity, side: Side, pair: &CurrencyPair) -> String {
    let side_word = match side {
        Side::Buy => "buy",
        Side::Sell => "sell",
    };
    format!(
        "Remaining {remaining} {base} added to {side_word} orders.",
        base = pair.base(),
    )
}

/// One resting order in the book dump
pub fn book_order_line(user_id: UserId, amount: Quantity, price: Price, pair: &CurrencyPair) -> String {
    let (base, quote) = pair.split();
    format!("User {user_id}: {amount} {base} @ {price} {base}/{quote}")
}

/// Full book dump, framed by blank lines
///
/// Both sides are listed best price first, arrival order within a price.
pub fn order_book_dump(engine: &MatchingEngine) -> String {
    let pair = engine.pair();
    let mut out = String::new();

    out.push_str("\n--- ORDER BOOK ---\n");
    out.push_str("Buy Orders:\n");
    for (user_id, amount, price) in engine.bids().orders() {
        out.push_str(&book_order_line(user_id, amount, price, pair));
        out.push('\n');
    }
    out.push_str("Sell Orders:\n");
    for (user_id, amount, price) in engine.asks().orders() {
        out.push_str(&book_order_line(user_id, amount, price, pair));
        out.push('\n');
    }
    out.push_str("------------------\n\n");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> CurrencyPair {
        CurrencyPair::new("UAH/USD")
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            banner(&pair()),
            "UAH/USD Order Book\n\
             Enter orders: userId amount(UAH) rate(UAH/USD) buy|sell\n\
             Example: 1 100 46 buy means buy 100 UAH at rate 46 UAH per 1 USD\n\
             Type 'exit' to quit\n\n"
        );
    }

    #[test]
    fn test_processing_line() {
        let order = Order::new(
            UserId::new(1),
            Quantity::new(100),
            Price::new(46),
            Side::Buy,
        );
        assert_eq!(
            processing_line(&order, &pair()),
            "Processing: User 1 wants to BUY 100 UAH @ 46 UAH/USD"
        );
    }

    #[test]
    fn test_matched_line_names_buyer_first() {
        let trade = Trade::new(
            UserId::new(2),
            UserId::new(1),
            Quantity::new(50),
            Price::new(46),
        );
        assert_eq!(
            matched_line(&trade, &pair()),
            "Matched 50 UAH @ 46 between User 2 and User 1"
        );
    }

    #[test]
    fn test_remaining_line() {
        assert_eq!(
            remaining_line(Quantity::new(50), Side::Sell, &pair()),
            "Remaining 50 UAH added to sell orders."
        );
        assert_eq!(
            remaining_line(Quantity::new(20), Side::Buy, &pair()),
            "Remaining 20 UAH added to buy orders."
        );
    }

    #[test]
    fn test_book_order_line() {
        assert_eq!(
            book_order_line(UserId::new(3), Quantity::new(10), Price::new(40), &pair()),
            "User 3: 10 UAH @ 40 UAH/USD"
        );
    }

    #[test]
    fn test_order_book_dump_empty() {
        let engine = MatchingEngine::new(pair());
        assert_eq!(
            order_book_dump(&engine),
            "\n--- ORDER BOOK ---\n\
             Buy Orders:\n\
             Sell Orders:\n\
             ------------------\n\n"
        );
    }

    #[test]
    fn test_order_book_dump_lists_both_sides() {
        let mut engine = MatchingEngine::new(pair());
        engine.submit_order(Order::new(
            UserId::new(1),
            Quantity::new(10),
            Price::new(40),
            Side::Buy,
        ));
        engine.submit_order(Order::new(
            UserId::new(2),
            Quantity::new(10),
            Price::new(45),
            Side::Sell,
        ));

        assert_eq!(
            order_book_dump(&engine),
            "\n--- ORDER BOOK ---\n\
             Buy Orders:\n\
             User 1: 10 UAH @ 40 UAH/USD\n\
             Sell Orders:\n\
             User 2: 10 UAH @ 45 UAH/USD\n\
             ------------------\n\n"
        );
    }

    #[test]
    fn test_other_pair_codes_flow_through() {
        let pair = CurrencyPair::new("EUR/PLN");
        let order = Order::new(
            UserId::new(9),
            Quantity::new(30),
            Price::new(4),
            Side::Sell,
        );
        assert_eq!(
            processing_line(&order, &pair),
            "Processing: User 9 wants to SELL 30 EUR @ 4 EUR/PLN"
        );
    }
}
