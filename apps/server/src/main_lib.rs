use std::sync::Arc;

use crate::config::Config;
use finpanel_core::{FinancialService, FinancialServiceTrait};
use finpanel_market_data::{FinancialDataProvider, YahooProvider};
use finpanel_view::PanelRenderer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub financial_service: Arc<dyn FinancialServiceTrait>,
    pub renderer: Arc<PanelRenderer>,
}

impl AppState {
    pub fn with_provider(provider: Arc<dyn FinancialDataProvider>) -> anyhow::Result<Self> {
        Ok(Self {
            financial_service: Arc::new(FinancialService::new(provider)),
            renderer: Arc::new(PanelRenderer::new()?),
        })
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("FP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
        if !log_format.eq_ignore_ascii_case("text") {
            tracing::warn!("Unknown FP_LOG_FORMAT {:?}, using text", log_format);
        }
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(YahooProvider::new(config.provider_timeout)?);
    tracing::info!(
        "Using {} provider (timeout {:?})",
        provider.id(),
        config.provider_timeout
    );
    Ok(Arc::new(AppState::with_provider(provider)?))
}
