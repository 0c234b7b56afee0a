//! Console front-end for the matching engine
//!
//! Reads line-oriented orders from an input stream, drives the engine,
//! and prints every trade, balance change, and the full book after each
//! accepted order. The engine owns all book state; this crate only
//! parses, formats, and loops.

pub mod display;
pub mod error;
pub mod parser;
pub mod session;
