//! Compact per-step log record.
//!
//! Each step produces one JSON array:
//!
//! ```text
//! [state, orders, conversions, trader_data, logs]
//! ```
//!
//! `state` is itself a positional array (timestamp, trader data, listings,
//! books, own trades, market trades, positions, observations). The three
//! free-text fields are truncated to equal shares of whatever the length
//! budget leaves after the fixed-shape part.

use quoter_core::{Observation, Order, Symbol, Trade, TradingState};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Accumulates free-text lines during a step and emits the step record.
#[derive(Debug, Clone)]
pub struct StepLogger {
    logs: String,
    max_log_length: usize,
}

impl Default for StepLogger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LOG_LENGTH)
    }
}

impl StepLogger {
    /// Simulator cap on a single step's log output.
    pub const DEFAULT_MAX_LOG_LENGTH: usize = 3750;

    pub fn new(max_log_length: usize) -> Self {
        Self {
            logs: String::new(),
            max_log_length,
        }
    }

    /// Append one line to this step's free-text log.
    pub fn print(&mut self, line: impl AsRef<str>) {
        self.logs.push_str(line.as_ref());
        self.logs.push('\n');
    }

    /// Build the step record, emit it on the `quoter::step` target, clear the
    /// buffer and return the record.
    ///
    /// Never fails: an unencodable record is logged and replaced by an
    /// empty string.
    pub fn flush(
        &mut self,
        state: &TradingState,
        orders: &BTreeMap<Symbol, Vec<Order>>,
        conversions: i64,
        trader_data: &str,
    ) -> String {
        let logs = std::mem::take(&mut self.logs);
        let compressed_orders = compress_orders(orders);

        let base = json!([
            compress_state(state, ""),
            compressed_orders,
            conversions,
            "",
            ""
        ]);
        let record = encode(&base).and_then(|base| {
            let max_item_length = self.max_log_length.saturating_sub(base.chars().count()) / 3;
            encode(&json!([
                compress_state(state, &truncate(&state.trader_data, max_item_length)),
                compressed_orders,
                conversions,
                truncate(trader_data, max_item_length),
                truncate(&logs, max_item_length),
            ]))
        });

        match record {
            Some(record) => {
                info!(target: "quoter::step", "{record}");
                record
            }
            None => String::new(),
        }
    }
}

fn encode(value: &Value) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!(error = %e, "Failed to encode step record");
            None
        }
    }
}

/// Cut `value` to at most `max_length` characters, marking the cut with `...`.
pub fn truncate(value: &str, max_length: usize) -> String {
    if value.chars().count() <= max_length {
        return value.to_string();
    }
    if max_length <= 3 {
        return ".".repeat(max_length);
    }
    let mut out: String = value.chars().take(max_length - 3).collect();
    out.push_str("...");
    out
}

fn compress_state(state: &TradingState, trader_data: &str) -> Value {
    json!([
        state.timestamp,
        trader_data,
        compress_listings(state),
        compress_order_depths(state),
        compress_trades(&state.own_trades),
        compress_trades(&state.market_trades),
        state.position,
        compress_observations(&state.observations),
    ])
}

fn compress_listings(state: &TradingState) -> Value {
    state
        .listings
        .values()
        .map(|l| json!([l.symbol, l.product, l.denomination]))
        .collect()
}

fn compress_order_depths(state: &TradingState) -> Value {
    let mut out = Map::new();
    for (symbol, depth) in &state.order_depths {
        out.insert(
            symbol.to_string(),
            json!([depth.buy_orders, depth.sell_orders]),
        );
    }
    Value::Object(out)
}

fn compress_trades(trades: &BTreeMap<Symbol, Vec<Trade>>) -> Value {
    trades
        .values()
        .flatten()
        .map(|t| {
            json!([
                t.symbol,
                t.price,
                t.quantity,
                t.buyer,
                t.seller,
                t.timestamp
            ])
        })
        .collect()
}

fn compress_observations(observations: &Observation) -> Value {
    let mut conversions = Map::new();
    for (product, o) in &observations.conversion_observations {
        conversions.insert(
            product.clone(),
            json!([
                o.bid_price,
                o.ask_price,
                o.transport_fees,
                o.export_tariff,
                o.import_tariff,
                o.sugar_price,
                o.sunlight_index
            ]),
        );
    }
    json!([observations.plain_value_observations, conversions])
}

fn compress_orders(orders: &BTreeMap<Symbol, Vec<Order>>) -> Value {
    orders
        .values()
        .flatten()
        .map(|o| json!([o.symbol, o.price, o.quantity]))
        .collect()
}

/// Render a human-readable order line (`BUY 5x 9998`).
pub fn describe_order(order: &Order) -> String {
    let side = order.side().as_str().to_uppercase();
    format!("{side} {}x {}", order.size(), order.price)
}
