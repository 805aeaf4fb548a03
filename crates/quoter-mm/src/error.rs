//! Market making error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MmError {
    #[error("Invalid maker parameters: {0}")]
    InvalidParams(String),

    #[error("No order book for {0}")]
    MissingOrderBook(String),

    #[error("No fair value available for {0}")]
    NoFairValue(String),
}

pub type MmResult<T> = Result<T, MmError>;
