//! Error types for the currency converter.

/// Failures talking to the third-party rate provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpstreamError {
    #[error("Provider returned HTTP status {0}")]
    Status(u16),

    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Malformed provider payload: {0}")]
    Malformed(String),

    #[error("Rate not available for {base} -> {target}")]
    MissingRate { base: String, target: String },
}

/// Conversion service errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Rejected before any network call.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Conversion failed: {0}")]
    ConversionFailed(#[from] UpstreamError),

    /// `amount * rate` overflowed.
    #[error("{amount} at rate {rate} has no finite result")]
    ResultOutOfRange { amount: f64, rate: f64 },
}

/// Local storage failures. Never shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Storage IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        PersistenceError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::Serialization(err.to_string())
    }
}

/// Application-level errors (for HTTP responses).
///
/// Messages are generic and user-facing; provider detail stays in the logs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub const INVALID_REQUEST: &'static str = "Invalid request parameters";
    pub const CONVERSION_FAILED: &'static str = "Failed to convert currency";
    pub const CURRENCIES_FAILED: &'static str = "Failed to fetch currencies";

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg) | AppError::Internal(msg) => msg,
        }
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidRequest(_) => AppError::BadRequest(Self::INVALID_REQUEST.into()),
            ConversionError::ConversionFailed(_) | ConversionError::ResultOutOfRange { .. } => {
                AppError::Internal(Self::CONVERSION_FAILED.into())
            }
        }
    }
}
