//! # FX Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, ConversionResult, ConversionRecord)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Response envelopes for the proxy API
//! - `error/` - Upstream, conversion, persistence and HTTP error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ConversionRecord, ConversionRequest, ConversionResult, Currency, CurrencyCode, CurrencyNames,
    RecordId,
};
pub use dto::*;
pub use error::{AppError, ConversionError, PersistenceError, UpstreamError};
pub use ports::{KeyValueStorage, RateSource};
