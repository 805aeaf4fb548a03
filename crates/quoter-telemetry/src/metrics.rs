//! Prometheus metrics for the quoter bot.
//!
//! Per-symbol labels only ever carry registered instruments, so their
//! cardinality is bounded by the configured instrument table.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`. A registration failure means a
//! duplicate metric name, which is a startup bug, not a runtime condition.

use crate::error::TelemetryResult;
use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};
use quoter_core::Order;

/// Steps processed.
pub static STEPS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("quoter_steps_total", "Total time steps processed").unwrap()
});

/// Orders emitted.
/// Labels: symbol, side (buy/sell)
pub static ORDERS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "quoter_orders_total",
        "Total orders emitted by strategies",
        &["symbol", "side"]
    )
    .unwrap()
});

/// Strategy failures (instrument skipped for the step).
pub static STRATEGY_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "quoter_strategy_errors_total",
        "Total strategy failures",
        &["symbol"]
    )
    .unwrap()
});

/// Instruments present in market data with no registered strategy.
/// Unlabeled: the skipped symbols come from market data and are unbounded.
pub static SKIPPED_INSTRUMENTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "quoter_skipped_instruments_total",
        "Total instruments skipped because no strategy is registered"
    )
    .unwrap()
});

/// Metrics helper.
pub struct Metrics;

impl Metrics {
    pub fn step_processed() {
        STEPS_TOTAL.inc();
    }

    pub fn orders_emitted(orders: &[Order]) {
        for order in orders {
            ORDERS_TOTAL
                .with_label_values(&[order.symbol.as_str(), order.side().as_str()])
                .inc();
        }
    }

    pub fn strategy_error(symbol: &str) {
        STRATEGY_ERRORS_TOTAL.with_label_values(&[symbol]).inc();
    }

    pub fn instrument_skipped() {
        SKIPPED_INSTRUMENTS_TOTAL.inc();
    }

    /// Render the default registry in Prometheus text format.
    pub fn render() -> TelemetryResult<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&prometheus::gather(), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoter_core::{Price, Quantity, Symbol};

    #[test]
    fn test_orders_counted_by_side() {
        let sym = Symbol::from("METRICS_TEST");
        let before_buy = ORDERS_TOTAL
            .with_label_values(&["METRICS_TEST", "buy"])
            .get();
        let before_sell = ORDERS_TOTAL
            .with_label_values(&["METRICS_TEST", "sell"])
            .get();

        Metrics::orders_emitted(&[
            Order::buy(sym.clone(), Price::new(10), Quantity::new(1)),
            Order::buy(sym.clone(), Price::new(9), Quantity::new(1)),
            Order::sell(sym, Price::new(11), Quantity::new(1)),
        ]);

        assert_eq!(
            ORDERS_TOTAL
                .with_label_values(&["METRICS_TEST", "buy"])
                .get(),
            before_buy + 2
        );
        assert_eq!(
            ORDERS_TOTAL
                .with_label_values(&["METRICS_TEST", "sell"])
                .get(),
            before_sell + 1
        );
    }

    #[test]
    fn test_skipped_instruments_unlabeled() {
        let before = SKIPPED_INSTRUMENTS_TOTAL.get();
        Metrics::instrument_skipped();
        assert!(SKIPPED_INSTRUMENTS_TOTAL.get() > before);

        let text = Metrics::render().unwrap();
        let line = text
            .lines()
            .find(|l| l.starts_with("quoter_skipped_instruments_total"))
            .unwrap();
        assert!(!line.contains('{'), "{line}");
    }

    #[test]
    fn test_render_contains_counters() {
        Metrics::step_processed();
        Metrics::instrument_skipped();
        let text = Metrics::render().unwrap();
        assert!(text.contains("quoter_steps_total"));
        assert!(text.contains("quoter_skipped_instruments_total"));
    }
}
