//! Conversion history record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::conversion::ConversionResult;
use super::currency::CurrencyCode;

/// Unique, time-ordered identifier for a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Creates a new RecordId from the current time.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a RecordId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A snapshot of one completed conversion.
///
/// Records are immutable once created. They are displayed only, never
/// re-validated or replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    pub id: RecordId,
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub amount: f64,
    pub result: f64,
    pub rate: f64,
    pub timestamp: DateTime<Utc>,
}

impl ConversionRecord {
    /// Snapshots a conversion result with a fresh id and the current time.
    pub fn from_result(res: &ConversionResult) -> Self {
        Self::from_result_at(res, Utc::now())
    }

    pub fn from_result_at(res: &ConversionResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            from_currency: res.from.clone(),
            to_currency: res.to.clone(),
            amount: res.amount,
            result: res.result,
            rate: res.rate,
            timestamp,
        }
    }
}
