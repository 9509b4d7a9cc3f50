//! # FX Hex
//!
//! Conversion service and HTTP proxy adapter for the currency converter.
//!
//! ## Architecture
//!
//! - `service/` - Conversion service (validation, rate lookup, arithmetic)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document for the proxy surface
//!
//! The service is generic over `S: RateSource`, allowing different
//! rate providers to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::ConversionService;
