//! Exchange rate provider port.
//!
//! Implementations are HTTP clients for a third-party provider or test doubles.
//! Every call is a fresh round trip: no retries, no caching.

use crate::domain::{CurrencyCode, CurrencyNames};
use crate::error::UpstreamError;

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync + 'static {
    /// Lists supported currencies with their display names.
    async fn list_currencies(&self) -> Result<CurrencyNames, UpstreamError>;

    /// Returns how many units of `target` one unit of `base` buys right now.
    async fn get_rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<f64, UpstreamError>;
}
