//! Core domain types for the quoter engine.
//!
//! This crate provides the per-step input/output schemas used throughout the system:
//! - `Symbol`: Instrument identifier
//! - `Price`, `Quantity`: Integer price and signed volume types
//! - `OrderDepth`: Price → volume tables for both sides of a book
//! - `Order`, `OrderSide`: Emitted order requests
//! - `TradingState`: The full market snapshot handed to strategies each step

pub mod book;
pub mod error;
pub mod order;
pub mod state;
pub mod units;

pub use book::OrderDepth;
pub use error::{CoreError, Result};
pub use order::{Order, OrderSide, Symbol};
pub use state::{ConversionObservation, Listing, Observation, Trade, TradingState};
pub use units::{Price, Quantity};
