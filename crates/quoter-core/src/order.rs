//! Instrument identifiers and emitted orders.

use crate::error::{CoreError, Result};
use crate::units::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tradable instrument identifier (e.g. `RAINFOREST_RESIN`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol, rejecting blank identifiers.
    pub fn parse(s: impl Into<String>) -> Result<Self> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(CoreError::InvalidSymbol(s));
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An order request: positive quantity buys, negative quantity sells.
///
/// A request is not a fill; the venue decides how much executes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    pub fn new(symbol: Symbol, price: Price, quantity: Quantity) -> Self {
        Self {
            symbol,
            price,
            quantity,
        }
    }

    /// Buy `size` (magnitude is used) at `price`.
    pub fn buy(symbol: Symbol, price: Price, size: Quantity) -> Self {
        Self::new(symbol, price, size.abs())
    }

    /// Sell `size` (magnitude is used) at `price`.
    pub fn sell(symbol: Symbol, price: Price, size: Quantity) -> Self {
        Self::new(symbol, price, -size.abs())
    }

    /// Side implied by the quantity sign. Zero-size orders read as buys.
    pub fn side(&self) -> OrderSide {
        if self.quantity.is_negative() {
            OrderSide::Sell
        } else {
            OrderSide::Buy
        }
    }

    /// Unsigned order size.
    pub fn size(&self) -> Quantity {
        self.quantity.abs()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}x {}",
            self.symbol,
            self.side(),
            self.size(),
            self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_rejects_blank() {
        assert!(Symbol::parse("  ").is_err());
        assert_eq!(Symbol::parse("KELP").unwrap().as_str(), "KELP");
    }

    #[test]
    fn test_order_constructors_sign_quantity() {
        let sym = Symbol::from("KELP");
        let buy = Order::buy(sym.clone(), Price::new(100), Quantity::new(-5));
        let sell = Order::sell(sym, Price::new(101), Quantity::new(5));

        assert_eq!(buy.quantity, Quantity::new(5));
        assert_eq!(buy.side(), OrderSide::Buy);
        assert_eq!(sell.quantity, Quantity::new(-5));
        assert_eq!(sell.side(), OrderSide::Sell);
        assert_eq!(sell.size(), Quantity::new(5));
        assert_eq!(sell.to_string(), "KELP sell 5x 101");
    }
}
