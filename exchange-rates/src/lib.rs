//! Exchange Rate Provider Adapter
//!
//! Implements the `RateSource` port against the freecurrencyapi.com v1 API:
//!
//! - `GET {base_url}/currencies?apikey=...` →
//!   `{ "data": { "<CODE>": { "name": ..., "name_plural": ... } } }`
//! - `GET {base_url}/latest?apikey=...&currencies=<TO>&base_currency=<FROM>` →
//!   `{ "data": { "<TO>": <rate> } }`
//!
//! Every call is a fresh round trip. There is no retry, no cache and no
//! timeout beyond the HTTP client's default.
//!
//! # Example
//! ```no_run
//! use exchange_rates::FreeCurrencyApi;
//! use fx_types::{CurrencyCode, RateSource};
//!
//! # async fn run() -> Result<(), fx_types::UpstreamError> {
//! let api = FreeCurrencyApi::new(FreeCurrencyApi::DEFAULT_BASE_URL, "my-key");
//! let usd: CurrencyCode = "USD".parse().unwrap();
//! let eur: CurrencyCode = "EUR".parse().unwrap();
//! let rate = api.get_rate(&usd, &eur).await?;
//! println!("1 USD = {rate} EUR");
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use fx_types::{CurrencyCode, CurrencyNames, RateSource, UpstreamError};

/// Provider payload: everything of interest sits under `data`.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<HashMap<String, Value>>,
}

/// HTTP client for the freecurrencyapi.com provider.
#[derive(Clone)]
pub struct FreeCurrencyApi {
    base_url: String,
    api_key: String,
    http: Client,
}

impl FreeCurrencyApi {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.freecurrencyapi.com/v1";

    /// Creates a new adapter. A trailing `/` on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, path: &str, query: &[(&str, &str)]) -> Result<Envelope, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Requesting {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Provider rejected request to {}", path);
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json::<Envelope>()
            .await
            .map_err(|e| UpstreamError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl RateSource for FreeCurrencyApi {
    #[instrument(skip(self))]
    async fn list_currencies(&self) -> Result<CurrencyNames, UpstreamError> {
        let envelope = self.fetch("/currencies", &[]).await?;
        let names = parse_currencies(envelope)?;
        debug!(count = names.len(), "Fetched currency list");
        Ok(names)
    }

    #[instrument(skip(self), fields(base = %base, target = %target))]
    async fn get_rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<f64, UpstreamError> {
        let envelope = self
            .fetch(
                "/latest",
                &[
                    ("currencies", target.as_str()),
                    ("base_currency", base.as_str()),
                ],
            )
            .await?;
        parse_rate(envelope, base, target)
    }
}

fn parse_currencies(envelope: Envelope) -> Result<CurrencyNames, UpstreamError> {
    let data = envelope
        .data
        .ok_or_else(|| UpstreamError::Malformed("missing `data` field".into()))?;

    Ok(data
        .into_iter()
        .filter_map(|(raw, details)| {
            let code = CurrencyCode::parse(&raw)?;
            let name = display_name(&code, &details);
            Some((code, name))
        })
        .collect())
}

/// Picks `name`, then `name_plural`, then the code itself. Blank names are skipped.
fn display_name(code: &CurrencyCode, details: &Value) -> String {
    ["name", "name_plural"]
        .iter()
        .filter_map(|field| details.get(field).and_then(Value::as_str))
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

fn parse_rate(
    envelope: Envelope,
    base: &CurrencyCode,
    target: &CurrencyCode,
) -> Result<f64, UpstreamError> {
    let missing = || UpstreamError::MissingRate {
        base: base.to_string(),
        target: target.to_string(),
    };

    envelope
        .data
        .as_ref()
        .and_then(|data| data.get(target.as_str()))
        .and_then(Value::as_f64)
        .filter(|rate| rate.is_finite() && *rate != 0.0)
        .ok_or_else(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-key";

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    async fn mock_currencies(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/currencies"))
            .and(query_param("apikey", API_KEY))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    async fn mock_latest(from: &str, to: &str, status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/latest"))
            .and(query_param("apikey", API_KEY))
            .and(query_param("currencies", to))
            .and(query_param("base_currency", from))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_list_currencies_uses_primary_name() {
        let server = mock_currencies(200, r#"{"data":{"JPY":{"name":"Japanese Yen"}}}"#).await;
        let api = FreeCurrencyApi::new(server.uri(), API_KEY);

        let names = api.list_currencies().await.unwrap();

        assert_eq!(names.len(), 1);
        assert_eq!(names.get(&code("JPY")).unwrap(), "Japanese Yen");
    }

    #[tokio::test]
    async fn test_list_currencies_name_fallbacks() {
        let body = r#"{"data":{
            "EUR":{"name":"Euro","name_plural":"Euros"},
            "GBP":{"name_plural":"British pounds"},
            "CHF":{"name":"","name_plural":"Swiss francs"},
            "XAU":{}
        }}"#;
        let server = mock_currencies(200, body).await;
        let api = FreeCurrencyApi::new(server.uri(), API_KEY);

        let names = api.list_currencies().await.unwrap();

        assert_eq!(names.get(&code("EUR")).unwrap(), "Euro");
        assert_eq!(names.get(&code("GBP")).unwrap(), "British pounds");
        assert_eq!(names.get(&code("CHF")).unwrap(), "Swiss francs");
        assert_eq!(names.get(&code("XAU")).unwrap(), "XAU");
    }

    #[tokio::test]
    async fn test_list_currencies_http_failure() {
        let server = mock_currencies(401, r#"{"message":"Invalid authentication credentials"}"#).await;
        let api = FreeCurrencyApi::new(server.uri(), API_KEY);

        let err = api.list_currencies().await.unwrap_err();

        assert_eq!(err, UpstreamError::Status(401));
    }

    #[tokio::test]
    async fn test_list_currencies_missing_data_is_malformed() {
        let server = mock_currencies(200, r#"{"meta":{}}"#).await;
        let api = FreeCurrencyApi::new(server.uri(), API_KEY);

        let err = api.list_currencies().await.unwrap_err();

        assert!(matches!(err, UpstreamError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_list_currencies_non_json_is_malformed() {
        let server = mock_currencies(200, "<html>oops</html>").await;
        let api = FreeCurrencyApi::new(server.uri(), API_KEY);

        let err = api.list_currencies().await.unwrap_err();

        assert!(matches!(err, UpstreamError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_get_rate() {
        let server = mock_latest("USD", "EUR", 200, r#"{"data":{"EUR":0.9}}"#).await;
        let api = FreeCurrencyApi::new(format!("{}/", server.uri()), API_KEY);

        let rate = api.get_rate(&code("USD"), &code("EUR")).await.unwrap();

        assert_eq!(rate, 0.9);
    }

    #[tokio::test]
    async fn test_get_rate_missing_target() {
        let server = mock_latest("USD", "EUR", 200, r#"{"data":{"GBP":0.8}}"#).await;
        let api = FreeCurrencyApi::new(server.uri(), API_KEY);

        let err = api.get_rate(&code("USD"), &code("EUR")).await.unwrap_err();

        assert_eq!(
            err,
            UpstreamError::MissingRate {
                base: "USD".into(),
                target: "EUR".into()
            }
        );
    }

    #[tokio::test]
    async fn test_get_rate_zero_is_missing() {
        let server = mock_latest("USD", "EUR", 200, r#"{"data":{"EUR":0}}"#).await;
        let api = FreeCurrencyApi::new(server.uri(), API_KEY);

        let err = api.get_rate(&code("USD"), &code("EUR")).await.unwrap_err();

        assert!(matches!(err, UpstreamError::MissingRate { .. }));
    }

    #[tokio::test]
    async fn test_get_rate_server_error() {
        let server = mock_latest("USD", "EUR", 500, "").await;
        let api = FreeCurrencyApi::new(server.uri(), API_KEY);

        let err = api.get_rate(&code("USD"), &code("EUR")).await.unwrap_err();

        assert_eq!(err, UpstreamError::Status(500));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let api = FreeCurrencyApi::new("http://127.0.0.1:9", API_KEY);

        let err = api.list_currencies().await.unwrap_err();

        assert!(matches!(err, UpstreamError::Transport(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = FreeCurrencyApi::new("https://api.example.com/v1/", API_KEY);
        assert_eq!(api.base_url(), "https://api.example.com/v1");
    }
}
