//! Conversion Application Service
//!
//! Validates conversion requests and prices them through the rate source port.
//! Contains NO infrastructure logic and never touches history.

use fx_types::{
    ConversionError, ConversionRequest, ConversionResult, CurrencyCode, CurrencyNames, RateSource,
    UpstreamError,
};

/// Application service for currency conversion.
///
/// Generic over `S: RateSource` - the provider adapter is injected at compile time.
pub struct ConversionService<S: RateSource> {
    source: S,
}

impl<S: RateSource> ConversionService<S> {
    /// Creates a new conversion service with the given rate source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Lists supported currencies, straight from the provider.
    pub async fn list_currencies(&self) -> Result<CurrencyNames, UpstreamError> {
        self.source.list_currencies().await
    }

    /// Converts `req.amount` of `req.from` into `req.to` at the current rate.
    ///
    /// Invalid requests fail before any network call. A product that
    /// overflows `f64` is a failed conversion, never a non-numeric result.
    pub async fn convert(&self, req: ConversionRequest) -> Result<ConversionResult, ConversionError> {
        let (from, to, amount) = validate(&req)?;
        let rate = self.source.get_rate(&from, &to).await?;
        let conversion = ConversionResult::compute(from, to, amount, rate);
        if !conversion.result.is_finite() {
            return Err(ConversionError::ResultOutOfRange { amount, rate });
        }
        Ok(conversion)
    }
}

fn validate(req: &ConversionRequest) -> Result<(CurrencyCode, CurrencyCode, f64), ConversionError> {
    let from = CurrencyCode::parse(&req.from)
        .ok_or_else(|| ConversionError::InvalidRequest("`from` is required".into()))?;
    let to = CurrencyCode::parse(&req.to)
        .ok_or_else(|| ConversionError::InvalidRequest("`to` is required".into()))?;

    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Err(ConversionError::InvalidRequest(format!(
            "amount must be a positive number, got {}",
            req.amount
        )));
    }

    Ok((from, to, req.amount))
}
