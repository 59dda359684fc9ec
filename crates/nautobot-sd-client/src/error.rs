//! Error types for the Nautobot client

use thiserror::Error;

/// Errors that can occur when querying Nautobot
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid endpoint URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Nautobot rejected the API token
    #[error("authentication failed (401): invalid token provided")]
    Unauthorized {
        /// Response body returned with the 401
        body: String,
    },

    /// Nautobot returned a non-200 status
    #[error("unexpected response ({status}): {body}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Response body did not match the expected schema
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// GraphQL layer reported errors for the query
    #[error("GraphQL errors: {}", .messages.join("; "))]
    Graphql {
        /// Error messages from the `errors` array
        messages: Vec<String>,
    },
}

impl ClientError {
    /// Check if the failure is caused by the API token
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// HTTP status associated with the failure, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized { .. } => Some(401),
            ClientError::Upstream { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
