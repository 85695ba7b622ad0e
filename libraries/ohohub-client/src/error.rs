//! Error types for the Ohohub API client.

use crate::validation::ValidationErrors;
use ohohub_core::HubError;
use thiserror::Error;

/// Errors that can occur when talking to the Ohohub API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status and no readable envelope
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Audio file not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error while reading an upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upload form failed validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// Classify a transport error, separating connectivity failures
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::ServerUnreachable(err.to_string())
        } else {
            Self::Request(err)
        }
    }
}

impl From<ClientError> for HubError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(errors) => HubError::InvalidInput(errors.to_string()),
            other => HubError::Api(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldError, UploadField};

    #[test]
    fn validation_failures_become_invalid_input() {
        let errors = ValidationErrors {
            errors: vec![FieldError {
                field: UploadField::PostTitle,
                message: "required".into(),
            }],
        };

        let err: HubError = ClientError::from(errors).into();
        assert!(matches!(err, HubError::InvalidInput(ref msg) if msg.contains("required")));
    }

    #[test]
    fn transport_failures_become_api_errors() {
        let err: HubError = ClientError::ServerError {
            status: 502,
            message: "bad gateway".into(),
        }
        .into();
        assert_eq!(err.to_string(), "API error: Server error (502): bad gateway");
    }
}
