//! Market making parameters.

use quoter_core::{Price, Quantity};
use serde::{Deserialize, Serialize};

use crate::error::{MmError, MmResult};
use crate::fair_value::{ConstantFairValue, FairValueEstimator, MidPriceFairValue};

/// Fixed per-instrument parameters. Not learned, not mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakerParams {
    /// Hard absolute position cap. Phase-1 fills never take the running
    /// position outside `[-limit, limit]`.
    pub limit: Quantity,

    /// Soft inventory threshold. At or beyond it, the engine switches to
    /// liquidation pricing. Also the size of each passive quote.
    pub custom_limit: Quantity,

    /// Distance (ticks) of passive quotes from fair value.
    pub spread: i64,

    /// Offset (ticks) from fair value used when liquidating.
    /// Buys at `fair + liquidate_val`, sells at `fair - liquidate_val`.
    #[serde(default)]
    pub liquidate_val: i64,
}

impl MakerParams {
    pub fn new(limit: i64, custom_limit: i64, spread: i64, liquidate_val: i64) -> Self {
        Self {
            limit: Quantity::new(limit),
            custom_limit: Quantity::new(custom_limit),
            spread,
            liquidate_val,
        }
    }

    /// Reject parameter sets that could produce unbounded or degenerate quoting.
    pub fn validate(&self) -> MmResult<()> {
        if !self.limit.is_positive() {
            return Err(MmError::InvalidParams(format!(
                "limit must be positive, got {}",
                self.limit
            )));
        }
        if !self.custom_limit.is_positive() {
            return Err(MmError::InvalidParams(format!(
                "custom_limit must be positive, got {}",
                self.custom_limit
            )));
        }
        if self.custom_limit > self.limit {
            return Err(MmError::InvalidParams(format!(
                "custom_limit {} exceeds limit {}",
                self.custom_limit, self.limit
            )));
        }
        if self.spread < 0 {
            return Err(MmError::InvalidParams(format!(
                "spread must not be negative, got {}",
                self.spread
            )));
        }
        Ok(())
    }
}

/// Fair value estimator selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FairValueConfig {
    /// Fixed price every step.
    Constant { price: Price },
    /// Integer mid of the best bid and ask, with an optional fallback
    /// for steps where one side of the book is empty.
    MidPrice {
        #[serde(default)]
        fallback: Option<Price>,
    },
}

impl FairValueConfig {
    /// Instantiate the configured estimator.
    pub fn build(&self) -> Box<dyn FairValueEstimator> {
        match self {
            Self::Constant { price } => Box::new(ConstantFairValue::new(*price)),
            Self::MidPrice { fallback } => Box::new(MidPriceFairValue::new(*fallback)),
        }
    }
}
