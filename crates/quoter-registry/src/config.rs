//! Registry configuration.

use quoter_core::Price;
use quoter_mm::presets::{rainforest_resin_params, RAINFOREST_RESIN, RESIN_FAIR_VALUE};
use quoter_mm::{FairValueConfig, MakerParams};
use serde::{Deserialize, Serialize};

/// One traded instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    /// Instrument identifier (e.g. "RAINFOREST_RESIN").
    pub symbol: String,
    /// Limits, spread and liquidation offset.
    #[serde(flatten)]
    pub params: MakerParams,
    /// Fair value estimator.
    pub fair_value: FairValueConfig,
}

impl InstrumentConfig {
    pub fn rainforest_resin() -> Self {
        Self {
            symbol: RAINFOREST_RESIN.to_string(),
            params: rainforest_resin_params(),
            fair_value: FairValueConfig::Constant {
                price: Price::new(RESIN_FAIR_VALUE),
            },
        }
    }
}

/// Full instrument table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub instruments: Vec<InstrumentConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            instruments: vec![InstrumentConfig::rainforest_resin()],
        }
    }
}
