//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use fx_types::{
    ConversionRequest, ConversionResult, ConvertResponse, CurrenciesResponse, CurrencyCode,
    ErrorResponse,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List supported currencies
#[utoipa::path(
    get,
    path = "/currencies",
    tag = "converter",
    responses(
        (status = 200, description = "Display name per currency code", body = CurrenciesResponse),
        (status = 500, description = "Rate provider unavailable", body = ErrorResponse, example = json!({"success": false, "error": "Failed to fetch currencies"}))
    )
)]
async fn list_currencies() {}

/// Convert an amount at the live rate
#[utoipa::path(
    post,
    path = "/convert",
    tag = "converter",
    request_body = ConversionRequest,
    responses(
        (status = 200, description = "Conversion result", body = ConvertResponse),
        (status = 400, description = "Missing currency or non-positive amount", body = ErrorResponse, example = json!({"success": false, "error": "Invalid request parameters"})),
        (status = 500, description = "Rate provider failure", body = ErrorResponse, example = json!({"success": false, "error": "Failed to convert currency"}))
    )
)]
async fn convert() {}

/// OpenAPI documentation for the converter proxy.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Converter Proxy API",
        version = "1.0.0",
        description = "Server-side proxy in front of a third-party exchange rate provider.\n\nEvery response carries a `success` flag. Failures carry a generic `error` message; provider details are never forwarded.",
        license(name = "MIT"),
    ),
    paths(health, list_currencies, convert),
    components(
        schemas(
            ConversionRequest,
            ConversionResult,
            ConvertResponse,
            CurrenciesResponse,
            ErrorResponse,
            CurrencyCode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "converter", description = "Currency list and conversion"),
    )
)]
pub struct ApiDoc;
