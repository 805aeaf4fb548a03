//! Order book depth for a single instrument.
//!
//! Sell-side volumes are stored as negative quantities, buy-side as
//! positive, matching the venue's snapshot convention.

use crate::units::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resting liquidity on both sides of the book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDepth {
    /// Bids: price → positive volume available to sell into.
    #[serde(default)]
    pub buy_orders: BTreeMap<Price, Quantity>,
    /// Asks: price → negative volume available to buy from.
    #[serde(default)]
    pub sell_orders: BTreeMap<Price, Quantity>,
}

impl OrderDepth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper: add a bid level (volume sign is normalized to positive).
    pub fn with_bid(mut self, price: i64, volume: i64) -> Self {
        self.buy_orders
            .insert(Price::new(price), Quantity::new(volume.abs()));
        self
    }

    /// Builder helper: add an ask level (volume sign is normalized to negative).
    pub fn with_ask(mut self, price: i64, volume: i64) -> Self {
        self.sell_orders
            .insert(Price::new(price), Quantity::new(-volume.abs()));
        self
    }

    /// Highest bid price.
    pub fn best_bid(&self) -> Option<Price> {
        self.buy_orders.keys().next_back().copied()
    }

    /// Lowest ask price.
    pub fn best_ask(&self) -> Option<Price> {
        self.sell_orders.keys().next().copied()
    }

    /// Integer mid of the best bid and ask. None unless both sides are present.
    pub fn mid_price(&self) -> Option<Price> {
        Some(self.best_bid()?.midpoint(self.best_ask()?))
    }

    /// Asks in ascending price order (cheapest first).
    pub fn asks(&self) -> impl Iterator<Item = (Price, Quantity)> + '_ {
        self.sell_orders.iter().map(|(p, v)| (*p, *v))
    }

    /// Bids in descending price order (richest first).
    pub fn bids(&self) -> impl Iterator<Item = (Price, Quantity)> + '_ {
        self.buy_orders.iter().rev().map(|(p, v)| (*p, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_normalizes_signs() {
        let depth = OrderDepth::new().with_bid(99, -3).with_ask(101, 4);
        assert_eq!(depth.buy_orders[&Price::new(99)], Quantity::new(3));
        assert_eq!(depth.sell_orders[&Price::new(101)], Quantity::new(-4));
    }

    #[test]
    fn test_best_prices_and_mid() {
        let depth = OrderDepth::new()
            .with_bid(98, 1)
            .with_bid(99, 2)
            .with_ask(103, 1)
            .with_ask(102, 5);

        assert_eq!(depth.best_bid(), Some(Price::new(99)));
        assert_eq!(depth.best_ask(), Some(Price::new(102)));
        assert_eq!(depth.mid_price(), Some(Price::new(100)));
    }

    #[test]
    fn test_level_iteration_order() {
        let depth = OrderDepth::new()
            .with_bid(98, 1)
            .with_bid(99, 2)
            .with_ask(103, 1)
            .with_ask(102, 5);

        let bid_prices: Vec<i64> = depth.bids().map(|(p, _)| p.inner()).collect();
        let ask_prices: Vec<i64> = depth.asks().map(|(p, _)| p.inner()).collect();
        assert_eq!(bid_prices, vec![99, 98]);
        assert_eq!(ask_prices, vec![102, 103]);
    }

    #[test]
    fn test_one_sided_book_has_no_mid() {
        let depth = OrderDepth::new().with_bid(99, 2);
        assert_eq!(depth.mid_price(), None);
        assert!(!depth.is_empty());
        assert!(OrderDepth::new().is_empty());
    }

    #[test]
    fn test_json_keys_are_integer_strings() {
        let json = r#"{"buy_orders":{"10002":4},"sell_orders":{"9998":-5}}"#;
        let depth: OrderDepth = serde_json::from_str(json).unwrap();
        assert_eq!(depth.best_bid(), Some(Price::new(10002)));
        assert_eq!(depth.sell_orders[&Price::new(9998)], Quantity::new(-5));
    }
}
