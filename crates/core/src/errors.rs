//! Core error types for Finpanel.

use thiserror::Error;

use finpanel_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for financial data requests.
#[derive(Error, Debug)]
pub enum Error {
    /// No symbol was given, or it was blank.
    #[error("Stock symbol is required")]
    MissingSymbol,

    /// The provider failed or returned something unusable.
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
}

impl Error {
    /// Whether the failure is the caller's fault rather than upstream's.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::MissingSymbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_symbol_is_client_error() {
        assert!(Error::MissingSymbol.is_client_error());
        assert_eq!(Error::MissingSymbol.to_string(), "Stock symbol is required");
    }

    #[test]
    fn test_market_data_error_keeps_provider_text() {
        let err: Error = MarketDataError::SymbolNotFound("ZZZZ".to_string()).into();
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "Symbol not found: ZZZZ");
    }
}
