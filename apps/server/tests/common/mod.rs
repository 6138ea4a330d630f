#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use finpanel_market_data::models::{
    IncomeStatementHistory, ProviderIncomeStatement, ProviderQuote, ProviderTimestamp,
    QuoteSummary, SummaryModule,
};
use finpanel_market_data::{FinancialDataProvider, MarketDataError};
use finpanel_server::{api::app_router, config::Config, AppState};
use tower::ServiceExt;

/// Provider returning canned payloads; `None` makes the call fail.
#[derive(Default)]
pub struct StubProvider {
    pub quote: Option<ProviderQuote>,
    pub summary: Option<QuoteSummary>,
}

#[async_trait]
impl FinancialDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn get_quote(&self, symbol: &str) -> Result<ProviderQuote, MarketDataError> {
        self.quote
            .clone()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }

    async fn get_quote_summary(
        &self,
        _symbol: &str,
        _modules: &[SummaryModule],
    ) -> Result<QuoteSummary, MarketDataError> {
        self.summary
            .clone()
            .ok_or_else(|| MarketDataError::provider("STUB", "summary unavailable"))
    }
}

pub fn aapl_quote() -> ProviderQuote {
    ProviderQuote {
        regular_market_price: Some(150.25),
        market_cap: Some(2_500_000_000_000.0),
        ..Default::default()
    }
}

pub fn summary_with_quarters() -> QuoteSummary {
    QuoteSummary {
        income_statement_history_quarterly: Some(IncomeStatementHistory {
            income_statement_history: vec![
                ProviderIncomeStatement {
                    end_date: Some(ProviderTimestamp::Epoch(1_680_220_800)),
                    total_revenue: Some(94_836_000_000.0),
                    ..Default::default()
                },
                ProviderIncomeStatement {
                    end_date: Some(ProviderTimestamp::Epoch(1_688_083_200)),
                    total_revenue: Some(81_797_000_000.0),
                    ..Default::default()
                },
            ],
        }),
        ..Default::default()
    }
}

pub fn app(provider: StubProvider) -> Router {
    let config = Config::from_lookup(|_| None).unwrap();
    let state = AppState::with_provider(Arc::new(provider)).unwrap();
    app_router(Arc::new(state), &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
