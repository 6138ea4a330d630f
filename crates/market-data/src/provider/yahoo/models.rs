//! Yahoo Finance response envelopes.
//!
//! The payload types live in `crate::models`; these wrappers only describe
//! how Yahoo nests them.

use serde::Deserialize;

use crate::models::{ProviderQuote, QuoteSummary};

/// Envelope of the v7 quote endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteResponse {
    pub quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
pub struct YahooQuoteResult {
    #[serde(default)]
    pub result: Vec<ProviderQuote>,
    pub error: Option<YahooApiError>,
}

/// Envelope of the v10 quoteSummary endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    /// `null` when the symbol is unknown
    pub result: Option<Vec<QuoteSummary>>,
    pub error: Option<YahooApiError>,
}

/// Error object Yahoo embeds in otherwise well-formed envelopes
#[derive(Debug, Deserialize)]
pub struct YahooApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl YahooApiError {
    pub fn is_not_found(&self) -> bool {
        self.code
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case("Not Found"))
    }

    pub fn message(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => format!("{}: {}", code, description),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => "Unknown Yahoo API error".to_string(),
        }
    }
}
