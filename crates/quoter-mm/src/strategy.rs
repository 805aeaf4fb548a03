//! Strategy interface consulted once per step per instrument.

use quoter_core::{Order, Price, Symbol, TradingState};

use crate::error::MmResult;

/// Per-instrument trading strategy.
///
/// Implementations are stateless across calls beyond their fixed
/// construction parameters. `make_orders` never mutates the snapshot and
/// returns a fresh order list each call.
pub trait Strategy: Send + Sync {
    /// Instrument this strategy trades.
    fn symbol(&self) -> &Symbol;

    /// Fair value estimate for this step.
    fn fair_value(&self, state: &TradingState) -> MmResult<Price>;

    /// Orders to submit this step.
    fn make_orders(&self, state: &TradingState) -> MmResult<Vec<Order>>;
}
