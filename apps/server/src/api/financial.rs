use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use finpanel_core::FinancialResponse;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SymbolQuery {
    pub symbol: Option<String>,
}

/// Quote, fundamentals and income statements for one ticker.
#[utoipa::path(
    get,
    path = "/api/financial",
    params(("symbol" = String, Query, description = "Ticker symbol, case-insensitive")),
    responses(
        (status = 200, description = "Quote, fundamentals and quarterly/annual income statements"),
        (status = 400, description = "Symbol missing or blank"),
        (status = 500, description = "Upstream provider failure")
    )
)]
pub async fn get_financial_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolQuery>,
) -> ApiResult<Json<FinancialResponse>> {
    let symbol = query.symbol.unwrap_or_default();
    let response = state
        .financial_service
        .get_financial_data(&symbol)
        .await
        .map_err(|e| {
            if !e.is_client_error() {
                tracing::error!("Error fetching financial data for {:?}: {}", symbol, e);
            }
            ApiError::from(e)
        })?;
    Ok(Json(response))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/financial", get(get_financial_data))
}
