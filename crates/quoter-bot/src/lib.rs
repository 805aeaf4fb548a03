//! Quoter bot.
//!
//! Wires the per-step pipeline together:
//! - `AppConfig`: TOML instrument table and telemetry settings
//! - `StrategyRegistry`: built once at startup from the config
//! - `Trader`: runs every registered strategy against each `TradingState`
//!   and emits the step record
//! - `replay`: JSON-lines driver used by the binary

pub mod config;
pub mod error;
pub mod replay;
pub mod trader;

pub use config::{AppConfig, TelemetryConfig};
pub use error::{AppError, AppResult};
pub use replay::replay;
pub use trader::{StepOutput, Trader};
