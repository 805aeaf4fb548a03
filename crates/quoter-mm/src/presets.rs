//! Ready-made instrument setups.

use quoter_core::{Price, Symbol};

use crate::config::MakerParams;
use crate::engine::MarketMakingEngine;
use crate::error::MmResult;
use crate::fair_value::ConstantFairValue;

pub const RAINFOREST_RESIN: &str = "RAINFOREST_RESIN";

/// Resin trades around a fixed 10000.
pub const RESIN_FAIR_VALUE: i64 = 10_000;

pub fn rainforest_resin_params() -> MakerParams {
    MakerParams::new(50, 15, 2, 0)
}

/// Constant-fair-value market maker for `RAINFOREST_RESIN`.
pub fn rainforest_resin() -> MmResult<MarketMakingEngine<ConstantFairValue>> {
    MarketMakingEngine::new(
        Symbol::from(RAINFOREST_RESIN),
        rainforest_resin_params(),
        ConstantFairValue::new(Price::new(RESIN_FAIR_VALUE)),
    )
}
