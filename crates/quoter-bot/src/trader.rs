//! Per-step orchestration.
//!
//! ```text
//! TradingState → Trader.run()
//!                  ├─ for each symbol (sorted): registry lookup
//!                  │    ├─ miss: skip
//!                  │    └─ hit: strategy.make_orders()
//!                  │         └─ error: log, count, continue
//!                  └─ StepLogger.flush()
//!                       ↓
//!                  StepOutput
//! ```

use crate::config::AppConfig;
use crate::error::AppResult;
use quoter_core::{Order, Symbol, TradingState};
use quoter_registry::StrategyRegistry;
use quoter_telemetry::step_log::describe_order;
use quoter_telemetry::{Metrics, StepLogger};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, error};

/// Everything returned to the simulator for one step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutput {
    pub orders: BTreeMap<Symbol, Vec<Order>>,
    /// Always 0; conversions are not used.
    pub conversions: i64,
    /// Always empty; no state is carried between steps.
    pub trader_data: String,
}

impl StepOutput {
    pub fn order_count(&self) -> usize {
        self.orders.values().map(Vec::len).sum()
    }
}

/// Runs every registered strategy once per step.
#[derive(Debug)]
pub struct Trader {
    registry: StrategyRegistry,
    logger: StepLogger,
}

impl Trader {
    pub fn new(registry: StrategyRegistry, logger: StepLogger) -> Self {
        Self { registry, logger }
    }

    /// Build the registry and step logger described by `config`.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let registry = StrategyRegistry::from_config(&config.registry_config())?;
        Ok(Self::new(
            registry,
            StepLogger::new(config.telemetry.max_log_length),
        ))
    }

    /// Process one step.
    ///
    /// An instrument whose strategy fails is dropped from this step's
    /// output; the remaining instruments still trade.
    pub fn run(&mut self, state: &TradingState) -> StepOutput {
        let mut output = StepOutput::default();

        for symbol in step_symbols(state) {
            let Some(strategy) = self.registry.get(symbol.as_str()) else {
                debug!(symbol = %symbol, "No strategy registered, skipping");
                Metrics::instrument_skipped();
                continue;
            };

            match strategy.make_orders(state) {
                Ok(orders) => {
                    for order in &orders {
                        self.logger.print(describe_order(order));
                    }
                    Metrics::orders_emitted(&orders);
                    output.orders.insert(symbol.clone(), orders);
                }
                Err(e) => {
                    error!(symbol = %symbol, timestamp = state.timestamp, error = %e, "Strategy failed");
                    Metrics::strategy_error(symbol.as_str());
                }
            }
        }

        self.logger
            .flush(state, &output.orders, output.conversions, &output.trader_data);
        Metrics::step_processed();

        debug!(
            timestamp = state.timestamp,
            instruments = output.orders.len(),
            orders = output.order_count(),
            "Step complete"
        );
        output
    }
}

/// Symbols seen this step: traded ones plus every symbol with a book.
fn step_symbols(state: &TradingState) -> BTreeSet<&Symbol> {
    state
        .market_trades
        .keys()
        .chain(state.order_depths.keys())
        .collect()
}
