//! Matching engine
//!
//! Continuous price-time priority matching for a single currency pair.
//!
//! **Key Invariants:**
//! - Better-priced orders fill first; equal prices fill in arrival order
//! - Deterministic: the same submissions always produce the same trades
//! - Trades execute at the resting order's price
//! - Conservation of quantity across fills
//! - Quote-currency settlement truncates, never rounds

pub mod book;
pub mod matching;
pub mod engine;

pub use engine::{MatchingEngine, SubmitOutcome, SubmitResult};
