//! Types library for the order book engine
//!
//! All type definitions shared between the matching engine and its
//! front-ends live here: identifiers, integer money types, and the
//! order/trade/balance-change records that cross crate boundaries.
//!
//! # Modules
//! - `ids`: Identifiers (UserId, CurrencyPair)
//! - `numeric`: Integer money types (Price, Quantity)
//! - `order`: Order and side types
//! - `trade`: Trade execution records
//! - `balance`: Balance adjustment records

pub mod balance;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

pub const LIB_VERSION: &str = "1.0.0";

/// One-stop imports for downstream crates
pub mod prelude {
    pub use crate::balance::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
}
