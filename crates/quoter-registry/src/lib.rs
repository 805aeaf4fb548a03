//! Strategy registry for the quoter bot.
//!
//! Maps each traded instrument to its strategy. Built once at startup from
//! configuration and passed to the orchestrator; never mutated afterwards.

pub mod config;
pub mod error;
pub mod registry;

pub use config::{InstrumentConfig, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use registry::StrategyRegistry;
