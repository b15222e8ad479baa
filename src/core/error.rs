use std::fmt;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Field-level input errors raised before anything touches storage
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Base amount missing, not a finite number, or not greater than zero
    #[error("Please enter a valid amount")]
    InvalidAmount,

    /// GST rate missing, not a finite number, or outside 0-100
    #[error("Please enter a valid GST rate (0-100)")]
    InvalidRate,

    /// Product name blank after trimming
    #[error("Please enter a product name")]
    EmptyProductName,

    /// Stored GST or total does not follow from the base amount and rate
    #[error("GST and total amounts do not match the base amount and rate")]
    InconsistentAmounts,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown sort order: {0}")]
    UnknownSortOrder(String),
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Store read/write failures
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Stored blob exists but is not a valid record collection
    #[error("Stored data is corrupted: {0}")]
    Corrupted(#[source] serde_json::Error),

    /// JSON serialization errors while writing
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn persistence(msg: impl fmt::Display) -> Self {
        AppError::Persistence(msg.to_string())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    /// True for every failure that came from reading or writing the store.
    /// Callers show these as a failure notice and let the user retry.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            AppError::Persistence(_) | AppError::Corrupted(_) | AppError::Json(_)
        )
    }

    /// The field-level error, if this is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}
