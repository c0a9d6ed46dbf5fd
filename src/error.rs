//! Error types for the REST-GraphQL gateway

use http::StatusCode;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the gateway
///
/// This enum covers all possible errors that can occur within the gateway,
/// including backend REST errors, transport errors, and runtime errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-2xx reply from the REST backend
    #[error("backend returned {status}: {message}")]
    Backend { status: StatusCode, message: String },

    /// HTTP transport errors (connect, timeout, malformed body)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Middleware errors
    #[error("Middleware error: {0}")]
    Middleware(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other error
    #[error("Error: {0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// The backend HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Backend { status, .. } => Some(*status),
            Error::Http(err) => err
                .status()
                .and_then(|s| StatusCode::from_u16(s.as_u16()).ok()),
            _ => None,
        }
    }

    /// Convert error to GraphQL error format
    pub fn to_graphql_error(&self) -> GraphQLError {
        GraphQLError {
            message: self.to_string(),
            extensions: self.extensions(),
        }
    }

    /// Get error code for extensions
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Error::Backend { .. } => "BACKEND_ERROR",
            Error::Http(_) => "TRANSPORT_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Middleware(_) => "MIDDLEWARE_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Other(_) => "UNKNOWN_ERROR",
        }
    }

    fn extensions(&self) -> std::collections::HashMap<String, serde_json::Value> {
        let mut map = std::collections::HashMap::new();
        map.insert("code".to_string(), serde_json::json!(self.code()));
        if let Some(status) = self.status() {
            map.insert("status".to_string(), serde_json::json!(status.as_u16()));
        }
        map
    }
}

/// GraphQL error response format
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub extensions: std::collections::HashMap<String, serde_json::Value>,
}

impl From<Error> for GraphQLError {
    fn from(err: Error) -> Self {
        err.to_graphql_error()
    }
}
