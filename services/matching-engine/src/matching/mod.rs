//! Match decision and settlement
//!
//! `crossing` answers whether two prices trade; `executor` turns a
//! decided match into a trade record with its balance changes.

pub mod crossing;
pub mod executor;

pub use crossing::{can_match, incoming_can_match};
pub use executor::MatchExecutor;
