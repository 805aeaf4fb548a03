//! Per-step market snapshot.
//!
//! `TradingState` is what the simulator hands the trader each step:
//! books, positions, recent trades and auxiliary observations. Field
//! aliases accept the simulator's camelCase names when replaying dumps.

use crate::book::OrderDepth;
use crate::error::Result;
use crate::order::Symbol;
use crate::units::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Listing metadata for a tradable symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub symbol: Symbol,
    pub product: String,
    pub denomination: String,
}

/// A print on the tape (own fill or market trade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
    #[serde(default)]
    pub buyer: Option<String>,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
}

/// Conversion venue quote for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionObservation {
    #[serde(alias = "bidPrice")]
    pub bid_price: Decimal,
    #[serde(alias = "askPrice")]
    pub ask_price: Decimal,
    #[serde(alias = "transportFees")]
    pub transport_fees: Decimal,
    #[serde(alias = "exportTariff")]
    pub export_tariff: Decimal,
    #[serde(alias = "importTariff")]
    pub import_tariff: Decimal,
    #[serde(alias = "sugarPrice")]
    pub sugar_price: Decimal,
    #[serde(alias = "sunlightIndex")]
    pub sunlight_index: Decimal,
}

/// Auxiliary observations. Not consumed by the market-making engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default, alias = "plainValueObservations")]
    pub plain_value_observations: BTreeMap<String, i64>,
    #[serde(default, alias = "conversionObservations")]
    pub conversion_observations: BTreeMap<String, ConversionObservation>,
}

/// Full market snapshot for one time step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingState {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, alias = "traderData")]
    pub trader_data: String,
    #[serde(default)]
    pub listings: BTreeMap<Symbol, Listing>,
    #[serde(default)]
    pub order_depths: BTreeMap<Symbol, OrderDepth>,
    #[serde(default)]
    pub own_trades: BTreeMap<Symbol, Vec<Trade>>,
    #[serde(default)]
    pub market_trades: BTreeMap<Symbol, Vec<Trade>>,
    #[serde(default)]
    pub position: BTreeMap<Symbol, Quantity>,
    #[serde(default)]
    pub observations: Observation,
}

impl TradingState {
    /// Decode a snapshot from a JSON document.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Book for `symbol`, if the venue published one this step.
    pub fn order_depth(&self, symbol: &str) -> Option<&OrderDepth> {
        self.order_depths.get(symbol)
    }

    /// Current net position. Symbols with no entry are flat.
    pub fn position_of(&self, symbol: &str) -> Quantity {
        self.position.get(symbol).copied().unwrap_or_default()
    }

    /// Builder helper used by fixtures and the replay tool.
    pub fn with_depth(mut self, symbol: &str, depth: OrderDepth) -> Self {
        self.order_depths.insert(Symbol::from(symbol), depth);
        self
    }

    /// Builder helper used by fixtures and the replay tool.
    pub fn with_position(mut self, symbol: &str, position: i64) -> Self {
        self.position
            .insert(Symbol::from(symbol), Quantity::new(position));
        self
    }
}
