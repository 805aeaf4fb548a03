//! Fair value estimation.

use quoter_core::{Price, Symbol, TradingState};

use crate::error::{MmError, MmResult};

/// Estimates an instrument's fair value from the current snapshot.
///
/// Estimators are pure functions of their construction parameters and
/// the snapshot; they must not keep state between steps.
#[cfg_attr(test, mockall::automock)]
pub trait FairValueEstimator: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    fn fair_value(&self, symbol: &Symbol, state: &TradingState) -> MmResult<Price>;
}

impl<T: FairValueEstimator + ?Sized> FairValueEstimator for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fair_value(&self, symbol: &Symbol, state: &TradingState) -> MmResult<Price> {
        (**self).fair_value(symbol, state)
    }
}

/// Fixed fair value, for instruments pinned to a known price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantFairValue {
    price: Price,
}

impl ConstantFairValue {
    pub fn new(price: Price) -> Self {
        Self { price }
    }
}

impl FairValueEstimator for ConstantFairValue {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn fair_value(&self, _symbol: &Symbol, _state: &TradingState) -> MmResult<Price> {
        Ok(self.price)
    }
}

/// Book-derived fair value: integer mid of best bid and best ask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MidPriceFairValue {
    fallback: Option<Price>,
}

impl MidPriceFairValue {
    pub fn new(fallback: Option<Price>) -> Self {
        Self { fallback }
    }
}

impl FairValueEstimator for MidPriceFairValue {
    fn name(&self) -> &'static str {
        "mid_price"
    }

    fn fair_value(&self, symbol: &Symbol, state: &TradingState) -> MmResult<Price> {
        state
            .order_depth(symbol.as_str())
            .and_then(|depth| depth.mid_price())
            .or(self.fallback)
            .ok_or_else(|| MmError::NoFairValue(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoter_core::OrderDepth;

    fn sym() -> Symbol {
        Symbol::from("KELP")
    }

    #[test]
    fn test_constant_ignores_book() {
        let est = ConstantFairValue::new(Price::new(10000));
        let state =
            TradingState::default().with_depth("KELP", OrderDepth::new().with_bid(1, 1).with_ask(3, 1));
        assert_eq!(est.fair_value(&sym(), &state).unwrap(), Price::new(10000));
    }

    #[test]
    fn test_mid_price_from_book() {
        let est = MidPriceFairValue::default();
        let state = TradingState::default().with_depth(
            "KELP",
            OrderDepth::new().with_bid(2028, 10).with_ask(2031, 10),
        );
        assert_eq!(est.fair_value(&sym(), &state).unwrap(), Price::new(2029));
    }

    #[test]
    fn test_mid_price_falls_back_on_one_sided_book() {
        let state = TradingState::default().with_depth("KELP", OrderDepth::new().with_bid(2028, 10));

        let with_fallback = MidPriceFairValue::new(Some(Price::new(2030)));
        assert_eq!(
            with_fallback.fair_value(&sym(), &state).unwrap(),
            Price::new(2030)
        );

        let without = MidPriceFairValue::default();
        assert!(matches!(
            without.fair_value(&sym(), &state),
            Err(MmError::NoFairValue(_))
        ));
    }

    #[test]
    fn test_boxed_estimator_delegates() {
        let boxed: Box<dyn FairValueEstimator> = Box::new(ConstantFairValue::new(Price::new(5)));
        assert_eq!(boxed.name(), "constant");
        assert_eq!(
            boxed.fair_value(&sym(), &TradingState::default()).unwrap(),
            Price::new(5)
        );
    }
}
