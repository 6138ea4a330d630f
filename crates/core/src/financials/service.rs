use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use finpanel_market_data::{FinancialDataProvider, SummaryModule};

use super::mapping::build_response;
use super::model::FinancialResponse;
use super::symbol::normalize_symbol;
use crate::errors::{Error, Result};

/// Fetches and normalizes financial data for a ticker.
#[async_trait]
pub trait FinancialServiceTrait: Send + Sync {
    /// Fetch quote and summary concurrently and map them into the contract.
    ///
    /// Fails with [`Error::MissingSymbol`] before contacting the provider when
    /// `symbol` is blank, and with [`Error::MarketData`] when either provider
    /// call fails. No partial result is ever returned.
    async fn get_financial_data(&self, symbol: &str) -> Result<FinancialResponse>;
}

pub struct FinancialService {
    provider: Arc<dyn FinancialDataProvider>,
}

impl FinancialService {
    pub fn new(provider: Arc<dyn FinancialDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl FinancialServiceTrait for FinancialService {
    async fn get_financial_data(&self, symbol: &str) -> Result<FinancialResponse> {
        let symbol = normalize_symbol(symbol).ok_or(Error::MissingSymbol)?;

        debug!(
            "Fetching financial data for {} from {}",
            symbol,
            self.provider.id()
        );

        let (quote, summary) = tokio::try_join!(
            self.provider.get_quote(&symbol),
            self.provider
                .get_quote_summary(&symbol, SummaryModule::FINANCIAL_PANEL)
        )
        .map_err(|e| {
            warn!(
                "Failed to fetch financial data for {} from {}: {}",
                symbol,
                self.provider.id(),
                e
            );
            Error::from(e)
        })?;

        Ok(build_response(&symbol, &quote, &summary))
    }
}
