//! Financial data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ProviderQuote, QuoteSummary, SummaryModule};

/// Trait for financial data providers.
///
/// The rest of the workspace treats a provider as an opaque capability:
/// its protocol, authentication and rate limits stay behind this trait.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use finpanel_market_data::{FinancialDataProvider, MarketDataError};
/// use finpanel_market_data::models::{ProviderQuote, QuoteSummary, SummaryModule};
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl FinancialDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_quote(&self, _symbol: &str) -> Result<ProviderQuote, MarketDataError> {
///         Ok(ProviderQuote::default())
///     }
///
///     async fn get_quote_summary(
///         &self,
///         _symbol: &str,
///         _modules: &[SummaryModule],
///     ) -> Result<QuoteSummary, MarketDataError> {
///         Ok(QuoteSummary::default())
///     }
/// }
/// ```
#[async_trait]
pub trait FinancialDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    ///
    /// Used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the current quote for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Provider symbol, already normalized to uppercase
    async fn get_quote(&self, symbol: &str) -> Result<ProviderQuote, MarketDataError>;

    /// Fetch a bundle of fundamentals, statistics and historical statements.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Provider symbol, already normalized to uppercase
    /// * `modules` - Which data modules to include in the bundle
    ///
    /// # Returns
    ///
    /// The summary bundle. Modules the provider has no data for are `None`
    /// rather than an error.
    async fn get_quote_summary(
        &self,
        symbol: &str,
        modules: &[SummaryModule],
    ) -> Result<QuoteSummary, MarketDataError>;
}
