//! Registry error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate instrument: {0}")]
    DuplicateSymbol(String),

    #[error("Invalid instrument {symbol}: {source}")]
    InvalidInstrument {
        symbol: String,
        #[source]
        source: quoter_mm::MmError,
    },

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(#[from] quoter_core::CoreError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
