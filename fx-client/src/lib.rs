//! # Converter Client SDK
//!
//! A typed Rust client for the currency converter proxy.

use fx_types::{
    ConversionRequest, ConversionResult, ConvertResponse, CurrenciesResponse, CurrencyNames,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Converter proxy client.
#[derive(Clone)]
pub struct ConverterClient {
    base_url: String,
    http: Client,
}

impl ConverterClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Checks if the proxy is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the supported currencies.
    pub async fn currencies(&self) -> Result<CurrencyNames, ClientError> {
        let resp = self
            .http
            .get(format!("{}/currencies", self.base_url))
            .send()
            .await?;
        let body: CurrenciesResponse = self.handle_response(resp).await?;
        Ok(body.data)
    }

    /// Converts an amount through the proxy.
    pub async fn convert(&self, req: &ConversionRequest) -> Result<ConversionResult, ClientError> {
        let resp = self
            .http
            .post(format!("{}/convert", self.base_url))
            .json(req)
            .send()
            .await?;
        let body: ConvertResponse = self.handle_response(resp).await?;
        Ok(body.conversion)
    }

    /// Decodes the `{ success, ... }` envelope.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        let body = resp.text().await?;
        let value = serde_json::from_str::<serde_json::Value>(&body).ok();

        let succeeded = value
            .as_ref()
            .and_then(|v| v.get("success"))
            .and_then(|s| s.as_bool())
            .unwrap_or(false);

        if status.is_success() && succeeded {
            return Ok(serde_json::from_str(&body)?);
        }

        let message = value
            .as_ref()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
