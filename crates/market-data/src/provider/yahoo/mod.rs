//! Yahoo Finance financial data provider.
//!
//! Uses two Yahoo endpoints:
//! - v7 `quote` for the live quote snapshot
//! - v10 `quoteSummary` for fundamentals and income statement history
//!
//! Both require the cookie/crumb pair Yahoo hands out to browsers.

mod models;

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{ProviderQuote, QuoteSummary, SummaryModule};
use crate::provider::FinancialDataProvider;

use models::{YahooQuoteResponse, YahooQuoteSummaryResponse};

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const COOKIE_URL: &str = "https://fc.yahoo.com";
const CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";
const QUOTE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";
const QUOTE_SUMMARY_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance provider.
pub struct YahooProvider {
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    ///
    /// `timeout` bounds every HTTP call made to Yahoo.
    pub fn new(timeout: Duration) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                MarketDataError::provider(
                    PROVIDER_ID,
                    format!("Failed to initialize HTTP client: {}", e),
                )
            })?;
        Ok(Self { client })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        let cached = YAHOO_CRUMB.read().ok().and_then(|guard| guard.clone());
        if let Some(crumb) = cached {
            return Ok(crumb);
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        debug!("Fetching new Yahoo crumb");

        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get(COOKIE_URL)
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to get cookie: {}", e))
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| {
                MarketDataError::provider(PROVIDER_ID, "Failed to parse Yahoo cookie")
            })?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get(CRUMB_URL)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to get crumb: {}", e))
            })?
            .text()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to read crumb: {}", e))
            })?;

        let crumb = crumb.trim().to_string();
        if crumb.is_empty() {
            return Err(MarketDataError::provider(PROVIDER_ID, "Empty Yahoo crumb"));
        }

        let crumb_data = CrumbData { cookie, crumb };

        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = Some(crumb_data.clone());
        }

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// GET a Yahoo endpoint with the session cookie and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        symbol: &str,
        url: &str,
        cookie: &str,
    ) -> Result<T, MarketDataError> {
        let response = self
            .client
            .get(url)
            .header(header::COOKIE, cookie)
            .send()
            .await
            .map_err(map_request_error)?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                self.clear_crumb();
                return Err(MarketDataError::provider(
                    PROVIDER_ID,
                    "Yahoo authentication expired",
                ));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            status if !status.is_success() => {
                return Err(MarketDataError::provider(
                    PROVIDER_ID,
                    format!("Unexpected HTTP status {}", status),
                ));
            }
            _ => {}
        }

        let body = response.text().await.map_err(map_request_error)?;
        serde_json::from_str(&body)
            .map_err(|e| MarketDataError::malformed(PROVIDER_ID, e.to_string()))
    }
}

// ============================================================================
// FinancialDataProvider Implementation
// ============================================================================

#[async_trait]
impl FinancialDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<ProviderQuote, MarketDataError> {
        debug!("Fetching quote for {} from Yahoo", symbol);

        let crumb = self.ensure_crumb().await?;
        let url = quote_url(symbol, &crumb.crumb);
        let response: YahooQuoteResponse = self.get_json(symbol, &url, &crumb.cookie).await?;

        quote_from_response(symbol, response)
    }

    async fn get_quote_summary(
        &self,
        symbol: &str,
        modules: &[SummaryModule],
    ) -> Result<QuoteSummary, MarketDataError> {
        debug!(
            "Fetching quote summary for {} from Yahoo (modules: {})",
            symbol,
            SummaryModule::join(modules)
        );

        let crumb = self.ensure_crumb().await?;
        let url = quote_summary_url(symbol, modules, &crumb.crumb);
        let response: YahooQuoteSummaryResponse =
            self.get_json(symbol, &url, &crumb.cookie).await?;

        summary_from_response(symbol, response)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn quote_url(symbol: &str, crumb: &str) -> String {
    format!(
        "{}?symbols={}&crumb={}",
        QUOTE_URL,
        encode(symbol),
        encode(crumb)
    )
}

fn quote_summary_url(symbol: &str, modules: &[SummaryModule], crumb: &str) -> String {
    format!(
        "{}/{}?modules={}&crumb={}",
        QUOTE_SUMMARY_URL,
        encode(symbol),
        encode(&SummaryModule::join(modules)),
        encode(crumb)
    )
}

fn map_request_error(e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }
    } else {
        MarketDataError::Network(e)
    }
}

/// Pull the single quote out of a v7 envelope.
fn quote_from_response(
    symbol: &str,
    response: YahooQuoteResponse,
) -> Result<ProviderQuote, MarketDataError> {
    let envelope = response.quote_response;
    if let Some(error) = envelope.error {
        return Err(MarketDataError::provider(PROVIDER_ID, error.message()));
    }

    envelope
        .result
        .into_iter()
        .next()
        .ok_or_else(|| {
            warn!("No quote returned for {}", symbol);
            MarketDataError::SymbolNotFound(symbol.to_string())
        })
}

/// Pull the single summary out of a v10 envelope.
fn summary_from_response(
    symbol: &str,
    response: YahooQuoteSummaryResponse,
) -> Result<QuoteSummary, MarketDataError> {
    let envelope = response.quote_summary;
    if let Some(error) = envelope.error {
        if error.is_not_found() {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }
        return Err(MarketDataError::provider(PROVIDER_ID, error.message()));
    }

    envelope
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| {
            warn!("No quote summary returned for {}", symbol);
            MarketDataError::SymbolNotFound(symbol.to_string())
        })
}

// ============================================================================
// Tests
// ============================================================================
