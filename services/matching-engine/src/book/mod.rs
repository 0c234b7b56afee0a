//! The two-sided book
//!
//! One sorted side per direction, each a map of FIFO price levels.

pub mod ask_book;
pub mod bid_book;
pub mod price_level;

pub use ask_book::AskBook;
pub use bid_book::BidBook;
pub use price_level::PriceLevel;
