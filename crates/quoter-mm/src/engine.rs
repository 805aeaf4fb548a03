//! Two-phase market making engine.
//!
//! Each step:
//! 1. Fair value from the estimator.
//! 2. Skewed buy/sell thresholds from the current position.
//! 3. Take every ask at or below the buy threshold and every bid at or
//!    above the sell threshold, as long as the full level keeps the running
//!    position inside `[-limit, limit]`.
//! 4. Recompute the thresholds from the running position.
//! 5. Post: flatten if the running position is at/beyond `custom_limit`,
//!    otherwise quote `custom_limit` on both sides.

use quoter_core::{Order, OrderDepth, Price, Quantity, Symbol, TradingState};
use tracing::{debug, trace};

use crate::config::MakerParams;
use crate::error::{MmError, MmResult};
use crate::fair_value::FairValueEstimator;
use crate::strategy::Strategy;

/// Buy and sell thresholds for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePrices {
    /// Highest price the engine will pay.
    pub buy: Price,
    /// Lowest price the engine will sell at.
    pub sell: Price,
}

/// Market making engine for a single instrument.
pub struct MarketMakingEngine<E = Box<dyn FairValueEstimator>> {
    symbol: Symbol,
    params: MakerParams,
    estimator: E,
}

impl<E: FairValueEstimator> MarketMakingEngine<E> {
    /// Create an engine. Fails on invalid parameters (e.g. `custom_limit > limit`).
    pub fn new(symbol: Symbol, params: MakerParams, estimator: E) -> MmResult<Self> {
        params.validate()?;
        Ok(Self {
            symbol,
            params,
            estimator,
        })
    }

    pub fn params(&self) -> &MakerParams {
        &self.params
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Thresholds for `position` around `fair`.
    ///
    /// Short at or beyond `custom_limit`: pay up to `fair + liquidate_val`.
    /// Long at or beyond `custom_limit`: sell down to `fair - liquidate_val`.
    /// Otherwise quote `fair ∓ spread`.
    pub fn skewed_prices(&self, fair: Price, position: Quantity) -> QuotePrices {
        let p = &self.params;

        let buy = if position <= -p.custom_limit {
            fair.offset(p.liquidate_val)
        } else {
            fair.offset(-p.spread)
        };
        let sell = if position >= p.custom_limit {
            fair.offset(-p.liquidate_val)
        } else {
            fair.offset(p.spread)
        };

        QuotePrices { buy, sell }
    }

    /// Phase 1: consume favorably priced resting levels.
    ///
    /// Every level is evaluated; a level that would breach the hard limit is
    /// skipped without ending the scan.
    fn take_liquidity(
        &self,
        depth: &OrderDepth,
        quotes: QuotePrices,
        position: &mut Quantity,
        orders: &mut Vec<Order>,
    ) {
        let limit = self.params.limit;

        for (price, volume) in depth.asks() {
            let size = volume.abs();
            if size.is_zero() || price > quotes.buy {
                continue;
            }
            if *position + size > limit {
                trace!(symbol = %self.symbol, %price, %size, %position, "Ask skipped: limit");
                continue;
            }
            debug!(symbol = %self.symbol, %price, %size, "Taking ask");
            orders.push(Order::buy(self.symbol.clone(), price, size));
            *position += size;
        }

        for (price, volume) in depth.bids() {
            let size = volume.abs();
            if size.is_zero() || price < quotes.sell {
                continue;
            }
            if *position - size < -limit {
                trace!(symbol = %self.symbol, %price, %size, %position, "Bid skipped: limit");
                continue;
            }
            debug!(symbol = %self.symbol, %price, %size, "Hitting bid");
            orders.push(Order::sell(self.symbol.clone(), price, size));
            *position -= size;
        }
    }

    /// Phase 2: flatten extreme inventory or post passive quotes.
    ///
    /// Normal-band quotes are always `custom_limit` in size; they are not
    /// clipped to the headroom left under `limit`.
    fn post_quotes(&self, quotes: QuotePrices, position: Quantity, orders: &mut Vec<Order>) {
        let custom_limit = self.params.custom_limit;

        if position <= -custom_limit {
            debug!(symbol = %self.symbol, price = %quotes.buy, size = %position.abs(), "Liquidating short");
            orders.push(Order::buy(self.symbol.clone(), quotes.buy, position.abs()));
        } else if position >= custom_limit {
            debug!(symbol = %self.symbol, price = %quotes.sell, size = %position, "Liquidating long");
            orders.push(Order::sell(self.symbol.clone(), quotes.sell, position));
        } else {
            debug!(
                symbol = %self.symbol,
                bid = %quotes.buy,
                ask = %quotes.sell,
                size = %custom_limit,
                "Posting quotes"
            );
            orders.push(Order::buy(self.symbol.clone(), quotes.buy, custom_limit));
            orders.push(Order::sell(self.symbol.clone(), quotes.sell, custom_limit));
        }
    }
}

impl<E: FairValueEstimator> Strategy for MarketMakingEngine<E> {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn fair_value(&self, state: &TradingState) -> MmResult<Price> {
        self.estimator.fair_value(&self.symbol, state)
    }

    fn make_orders(&self, state: &TradingState) -> MmResult<Vec<Order>> {
        let depth = state
            .order_depth(self.symbol.as_str())
            .ok_or_else(|| MmError::MissingOrderBook(self.symbol.to_string()))?;

        let fair = self.fair_value(state)?;
        let mut position = state.position_of(self.symbol.as_str());
        let mut orders = Vec::new();

        let quotes = self.skewed_prices(fair, position);
        self.take_liquidity(depth, quotes, &mut position, &mut orders);

        // Phase-1 fills may have pushed inventory across custom_limit
        let quotes = self.skewed_prices(fair, position);
        self.post_quotes(quotes, position, &mut orders);

        Ok(orders)
    }
}
