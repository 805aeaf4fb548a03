//! Market making strategy for the quoter bot.
//!
//! Turns a fair-value estimate and the current inventory into orders:
//! - Fair value from a pluggable `FairValueEstimator`
//! - Inventory-aware skew between normal and liquidation pricing
//! - Phase 1: take mispriced resting liquidity within the hard limit
//! - Phase 2: post passive quotes, or a single order that flattens inventory
//!
//! # Architecture
//!
//! ```text
//! TradingState → MarketMakingEngine.make_orders()
//!                  ├─ FairValueEstimator: fair price this step
//!                  ├─ skewed_prices(position): buy/sell thresholds
//!                  ├─ take: consume asks ≤ buy, bids ≥ sell
//!                  ├─ skewed_prices(running position)
//!                  └─ post: quotes or flatten order
//!                       ↓
//!                  Vec<Order> (returned to the orchestrator)
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fair_value;
pub mod presets;
pub mod strategy;

pub use config::{FairValueConfig, MakerParams};
pub use engine::{MarketMakingEngine, QuotePrices};
pub use error::{MmError, MmResult};
pub use fair_value::{ConstantFairValue, FairValueEstimator, MidPriceFairValue};
pub use strategy::Strategy;
