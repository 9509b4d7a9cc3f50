//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use fx_types::{
    AppError, ConversionError, ConversionRequest, ConvertResponse, CurrenciesResponse,
    ErrorResponse, RateSource,
};

use crate::ConversionService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<S: RateSource> {
    pub service: ConversionService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.0.message()))).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document for the proxy.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// List supported currencies with display names.
#[tracing::instrument(skip(state))]
pub async fn list_currencies<S: RateSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let names = state.service.list_currencies().await.map_err(|e| {
        tracing::error!(error = %e, "Error fetching currencies");
        AppError::Internal(AppError::CURRENCIES_FAILED.into())
    })?;

    tracing::debug!(count = names.len(), "Serving currency list");
    Ok(Json(CurrenciesResponse::ok(names)))
}

/// Convert an amount between two currencies at the live rate.
///
/// Bodies that are not valid JSON or carry wrongly typed fields are rejected
/// the same way as failed validation.
#[tracing::instrument(skip(state, payload))]
pub async fn convert<S: RateSource>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected convert body");
        AppError::BadRequest(AppError::INVALID_REQUEST.into())
    })?;

    match state.service.convert(req).await {
        Ok(conversion) => {
            tracing::info!(
                from = %conversion.from,
                to = %conversion.to,
                amount = conversion.amount,
                rate = conversion.rate,
                "Converted"
            );
            Ok(Json(ConvertResponse::ok(conversion)))
        }
        Err(e) => {
            match &e {
                ConversionError::InvalidRequest(reason) => {
                    tracing::warn!(reason = %reason, "Invalid convert request");
                }
                ConversionError::ConversionFailed(cause) => {
                    tracing::error!(error = %cause, "Error converting currency");
                }
                ConversionError::ResultOutOfRange { .. } => {
                    tracing::error!(error = %e, "Error converting currency");
                }
            }
            Err(AppError::from(e).into())
        }
    }
}
