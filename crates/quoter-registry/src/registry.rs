//! Instrument → strategy table.

use quoter_core::Symbol;
use quoter_mm::{FairValueEstimator, MarketMakingEngine, Strategy};
use std::collections::HashMap;
use tracing::info;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};

/// Fixed mapping from instrument to strategy.
///
/// A lookup miss means the instrument is not traded; callers skip it.
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: HashMap<Symbol, Box<dyn Strategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from configuration.
    ///
    /// Fails on duplicate symbols or invalid parameters; nothing is traded
    /// with a half-built table.
    pub fn from_config(config: &RegistryConfig) -> RegistryResult<Self> {
        let mut registry = Self::new();

        for instrument in &config.instruments {
            let symbol = Symbol::parse(instrument.symbol.as_str())?;
            let engine = MarketMakingEngine::new(
                symbol.clone(),
                instrument.params,
                instrument.fair_value.build(),
            )
            .map_err(|source| RegistryError::InvalidInstrument {
                symbol: symbol.to_string(),
                source,
            })?;

            info!(
                symbol = %symbol,
                limit = %instrument.params.limit,
                custom_limit = %instrument.params.custom_limit,
                spread = instrument.params.spread,
                liquidate_val = instrument.params.liquidate_val,
                fair_value = engine.estimator().name(),
                "Registered instrument"
            );
            registry.register(Box::new(engine))?;
        }

        Ok(registry)
    }

    /// Add a strategy under its own symbol.
    pub fn register(&mut self, strategy: Box<dyn Strategy>) -> RegistryResult<()> {
        let symbol = strategy.symbol().clone();
        if self.strategies.contains_key(&symbol) {
            return Err(RegistryError::DuplicateSymbol(symbol.to_string()));
        }
        self.strategies.insert(symbol, strategy);
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&dyn Strategy> {
        self.strategies.get(symbol).map(|s| s.as_ref())
    }

    /// Registered symbols in sorted order.
    pub fn symbols(&self) -> Vec<&Symbol> {
        let mut symbols: Vec<&Symbol> = self.strategies.keys().collect();
        symbols.sort();
        symbols
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("symbols", &self.symbols())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InstrumentConfig;
    use quoter_core::{OrderDepth, Price, TradingState};
    use quoter_mm::{FairValueConfig, MakerParams};

    #[test]
    fn test_default_config_registers_resin() {
        let registry = StrategyRegistry::from_config(&RegistryConfig::default()).unwrap();
        assert_eq!(registry.len(), 1);

        let strategy = registry.get("RAINFOREST_RESIN").unwrap();
        assert_eq!(
            strategy.fair_value(&TradingState::default()).unwrap(),
            Price::new(10000)
        );
    }

    #[test]
    fn test_miss_is_none() {
        let registry = StrategyRegistry::from_config(&RegistryConfig::default()).unwrap();
        assert!(registry.get("KELP").is_none());
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        let config = RegistryConfig {
            instruments: vec![
                InstrumentConfig::rainforest_resin(),
                InstrumentConfig::rainforest_resin(),
            ],
        };
        let err = StrategyRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateSymbol(s) if s == "RAINFOREST_RESIN"));
    }

    #[test]
    fn test_custom_limit_above_limit_rejected() {
        let config = RegistryConfig {
            instruments: vec![InstrumentConfig {
                symbol: "KELP".to_string(),
                params: MakerParams::new(10, 20, 1, 0),
                fair_value: FairValueConfig::MidPrice { fallback: None },
            }],
        };
        let err = StrategyRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidInstrument { .. }));
        assert!(err.to_string().contains("KELP"));
    }

    #[test]
    fn test_blank_symbol_rejected() {
        let mut instrument = InstrumentConfig::rainforest_resin();
        instrument.symbol = " ".to_string();
        let config = RegistryConfig {
            instruments: vec![instrument],
        };
        assert!(matches!(
            StrategyRegistry::from_config(&config),
            Err(RegistryError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_registered_strategies_trade_their_own_symbol() {
        let config = RegistryConfig {
            instruments: vec![
                InstrumentConfig::rainforest_resin(),
                InstrumentConfig {
                    symbol: "KELP".to_string(),
                    params: MakerParams::new(50, 10, 1, 0),
                    fair_value: FairValueConfig::MidPrice { fallback: None },
                },
            ],
        };
        let registry = StrategyRegistry::from_config(&config).unwrap();
        let names: Vec<&str> = registry.symbols().into_iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["KELP", "RAINFOREST_RESIN"]);

        let state = TradingState::default()
            .with_depth("KELP", OrderDepth::new().with_bid(2020, 5).with_ask(2024, 5));
        let orders = registry.get("KELP").unwrap().make_orders(&state).unwrap();
        assert!(orders.iter().all(|o| o.symbol.as_str() == "KELP"));
    }
}
