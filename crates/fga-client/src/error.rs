//! Error types for client operations.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by an [`SdkClient`](crate::SdkClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection, timeout, TLS
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// A success response whose body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Unusable client configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a failed response.
    ///
    /// Uses the server's `{"code", "message"}` body when it has one, the raw
    /// body text otherwise.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { code, message }) => Self::Api {
                status,
                code,
                message: message.unwrap_or_else(|| body.trim().to_string()),
            },
            Err(_) => Self::Api {
                status,
                code: None,
                message: body.trim().to_string(),
            },
        }
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
