//! Error types and handling for address-lookup.
//!
//! Failures in this crate are never fatal to the widget: the [`Predictor`]
//! consumes every error by logging it and leaving its state untouched, so
//! the next keystroke or click starts a fresh attempt. Malformed service
//! records (a component with no `types`) are not errors at all; they are
//! skipped per item with a warning.
//!
//! [`Predictor`]: crate::Predictor

/// Result type alias for address-lookup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for address-lookup operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The suggestion fetch rejected
    #[error("Suggestion fetch failed: {message}")]
    SuggestionFetch {
        /// Error message from the service implementation
        message: String,
    },

    /// The place-details fetch rejected
    #[error("Place details fetch failed: {message}")]
    DetailFetch {
        /// Error message from the service implementation
        message: String,
    },

    /// A resolved place carried no address components
    #[error("Address component list is empty")]
    EmptyComponents,
}

impl Error {
    /// Create a new suggestion-fetch error
    pub fn suggestion_fetch(message: impl Into<String>) -> Self {
        Self::SuggestionFetch {
            message: message.into(),
        }
    }

    /// Create a new detail-fetch error
    pub fn detail_fetch(message: impl Into<String>) -> Self {
        Self::DetailFetch {
            message: message.into(),
        }
    }
}
