//! Configuration loading from environment.

use std::env;

use exchange_rates::FreeCurrencyApi;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub provider_base_url: String,
    /// Provider credential. Absent means every upstream call will be rejected.
    pub provider_api_key: Option<String>,
    pub log_json: bool,
    /// OTLP collector endpoint; tracing export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?;

        let provider_base_url = lookup("FX_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| FreeCurrencyApi::DEFAULT_BASE_URL.to_string());

        let provider_api_key = lookup("FX_API_KEY").filter(|v| !v.trim().is_empty());

        let log_json = lookup("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            provider_base_url,
            provider_api_key,
            log_json,
            otlp_endpoint,
        })
    }
}
