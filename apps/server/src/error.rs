use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use finpanel_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

pub const FETCH_FAILED: &str = "Failed to fetch stock data";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Stock symbol is required")]
    MissingSymbol,
    /// Provider or normalization failure; carries the underlying error text
    #[error("Failed to fetch stock data: {0}")]
    Upstream(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingSymbol => ApiError::MissingSymbol,
            CoreError::MarketData(e) => ApiError::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            ApiError::MissingSymbol => (StatusCode::BAD_REQUEST, self.to_string(), None),
            ApiError::Upstream(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                FETCH_FAILED.to_string(),
                Some(details.clone()),
            ),
            ApiError::Internal(reason) => {
                (StatusCode::INTERNAL_SERVER_ERROR, reason.clone(), None)
            }
        };
        (status, Json(ErrorBody { error, details })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use finpanel_market_data::MarketDataError;

    #[test]
    fn test_core_errors_map_to_api_errors() {
        assert!(matches!(
            ApiError::from(CoreError::MissingSymbol),
            ApiError::MissingSymbol
        ));

        let err = ApiError::from(CoreError::MarketData(MarketDataError::SymbolNotFound(
            "ZZZZ".to_string(),
        )));
        assert!(matches!(err, ApiError::Upstream(ref d) if d == "Symbol not found: ZZZZ"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingSymbol.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Upstream("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    async fn body_json(err: ApiError) -> serde_json::Value {
        let bytes = axum::body::to_bytes(err.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_bodies() {
        let body = body_json(ApiError::Upstream("boom".to_string())).await;
        assert_eq!(body["error"], FETCH_FAILED);
        assert_eq!(body["details"], "boom");

        let body = body_json(ApiError::Internal("template failed".to_string())).await;
        assert_eq!(body["error"], "template failed");
        assert!(body.get("details").is_none());

        let body = body_json(ApiError::MissingSymbol).await;
        assert_eq!(body["error"], ApiError::MissingSymbol.to_string());
        assert!(body.get("details").is_none());
    }
}
