//! Response envelopes for the proxy API.
//!
//! Every response carries a `success` flag. Successful payloads sit next to
//! it; failures carry a single user-facing `error` string.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ConversionResult, CurrencyNames};

/// Response for `GET /currencies`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrenciesResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Display name per currency code
    #[schema(value_type = Object, example = json!({"JPY": "Japanese Yen"}))]
    pub data: CurrencyNames,
}

impl CurrenciesResponse {
    pub fn ok(data: CurrencyNames) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response for a successful `POST /convert`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    #[schema(example = true)]
    pub success: bool,
    #[serde(flatten)]
    pub conversion: ConversionResult,
}

impl ConvertResponse {
    pub fn ok(conversion: ConversionResult) -> Self {
        Self {
            success: true,
            conversion,
        }
    }
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Invalid request parameters")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
