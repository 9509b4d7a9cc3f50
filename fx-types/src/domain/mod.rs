//! Domain models for the currency converter.

pub mod conversion;
pub mod currency;
pub mod record;

pub use conversion::{ConversionRequest, ConversionResult};
pub use currency::{Currency, CurrencyCode, CurrencyNames};
pub use record::{ConversionRecord, RecordId};
