//! Conversion request and result.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::currency::CurrencyCode;

/// Request to convert an amount between two currencies.
///
/// Fields arrive unvalidated from the wire. Missing fields deserialize to
/// empty/zero values so that validation, not the decoder, rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionRequest {
    /// Base currency code
    #[serde(default)]
    #[schema(example = "USD")]
    pub from: String,
    /// Target currency code
    #[serde(default)]
    #[schema(example = "EUR")]
    pub to: String,
    /// Amount of base currency, must be positive
    #[serde(default)]
    #[schema(example = 100.0)]
    pub amount: f64,
}

impl ConversionRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Outcome of a successful conversion.
///
/// `rate` is the spot price of one unit of `from` in units of `to`, as
/// reported at request time. `result` is exactly `amount * rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResult {
    #[schema(example = 90.0)]
    pub result: f64,
    #[schema(example = 0.9)]
    pub rate: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    #[schema(example = 100.0)]
    pub amount: f64,
}

impl ConversionResult {
    /// Applies `rate` to `amount`. No rounding happens here.
    pub fn compute(from: CurrencyCode, to: CurrencyCode, amount: f64, rate: f64) -> Self {
        Self {
            result: amount * rate,
            rate,
            from,
            to,
            amount,
        }
    }
}
