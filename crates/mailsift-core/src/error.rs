//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur when submitting an email for classification.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither free text nor an attached file carried any content.
    #[error("email content cannot be empty")]
    EmptyInput,

    /// The backend answered with a non-success status.
    ///
    /// `message` is the backend's `detail` field when the error body could
    /// be decoded, or a generic status-coded message otherwise.
    #[error("{message}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable failure description.
        message: String,
    },

    /// The request could not be completed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response body was not valid JSON of the expected shape.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status carried by this error, when the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
