use serde::Deserialize;
use thiserror::Error;

/// Failure of a single catalog API operation.
///
/// The variants mirror how callers react: a missing target, a rejected
/// field value, an unexpected status, or no usable response at all.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced book (or review target) does not exist.
    #[error("Resource not found")]
    NotFound,

    /// The server rejected a field value (HTTP 422).
    #[error("Validation failed: {message}")]
    Validation {
        /// Offending field, when the server identified one.
        field: Option<String>,
        message: String,
    },

    /// Any other non-success status, with the raw payload for display.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Network or decode failure below the HTTP layer.
    #[error("Transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
}

/// Error body the server sends with 422 responses: the first failing field
/// and its message.
#[derive(Debug, Deserialize)]
struct ValidationBody {
    field: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-success response by status code and raw payload.
    ///
    /// A 422 whose body does not match the structured shape still becomes a
    /// `Validation` error, carrying the raw body as the message.
    pub(crate) fn from_response(status: u16, body: String) -> Self {
        match status {
            404 => ApiError::NotFound,
            422 => match serde_json::from_str::<ValidationBody>(&body) {
                Ok(ValidationBody {
                    field,
                    message: Some(message),
                }) => ApiError::Validation { field, message },
                _ => ApiError::Validation {
                    field: None,
                    message: body,
                },
            },
            _ => ApiError::Status { status, body },
        }
    }
}
