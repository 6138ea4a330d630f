use std::sync::Arc;

use crate::{
    api::financial::SymbolQuery,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use finpanel_view::ViewState;

/// Server-rendered panel. Without a symbol the page stays idle.
async fn financial_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SymbolQuery>,
) -> ApiResult<Html<String>> {
    let mut view = ViewState::new(query.symbol.unwrap_or_default());

    if let Some(symbol) = view.begin_fetch() {
        match state.financial_service.get_financial_data(&symbol).await {
            Ok(response) => view.complete_success(response),
            Err(e) => {
                tracing::error!("Error fetching financial data for {}: {}", symbol, e);
                view.complete_error(Some(ApiError::from(e).to_string()));
            }
        }
    }

    let html = state
        .renderer
        .render_page(&view)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Html(html))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(financial_page))
}
