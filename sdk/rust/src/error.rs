//! Error types for the Notifi SDK.
//!
//! Failures fall into two families: transport failures, surfaced unchanged
//! from the HTTP client, and failures the SDK raises itself after a response
//! arrived (missing data, malformed envelope, undecodable result).

use notifi_core::GraphQlError;
use std::fmt;
use thiserror::Error;

/// Typed error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    // Network errors
    NetworkError,
    Timeout,
    ConnectionRefused,

    // Protocol errors
    HttpError,
    InvalidUrl,
    InvalidHeader,
    InvalidResponse,

    // GraphQL errors
    NoData,
    DeserializeError,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::ConnectionRefused => "CONNECTION_REFUSED",
            Self::HttpError => "HTTP_ERROR",
            Self::InvalidUrl => "INVALID_URL",
            Self::InvalidHeader => "INVALID_HEADER",
            Self::InvalidResponse => "INVALID_RESPONSE",
            Self::NoData => "NO_DATA",
            Self::DeserializeError => "DESERIALIZE_ERROR",
        }
    }

    /// Returns true if a caller could reasonably retry.
    ///
    /// The SDK itself never retries.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError | Self::Timeout | Self::ConnectionRefused
        )
    }

    /// Returns true if the error stems from caller-supplied configuration.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidUrl | Self::InvalidHeader)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned by every SDK operation.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NotifiError {
    /// Network failure or non-2xx status, exactly as reported by the HTTP
    /// client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The envelope arrived but `data[field]` was absent or null.
    #[error("No data returned from notifi")]
    NoData {
        field: String,
        errors: Vec<GraphQlError>,
    },

    /// A 2xx body that is not a GraphQL envelope.
    #[error("notifi response is not a GraphQL envelope: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// `data[field]` is present but does not match the operation's result type.
    #[error("failed to decode `{field}` from notifi response: {source}")]
    Decode {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid notifi endpoint `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid default header `{name}`")]
    InvalidHeader { name: String },
}

impl NotifiError {
    /// Creates a missing-data error for `field`.
    pub fn no_data(field: impl Into<String>, errors: Vec<GraphQlError>) -> Self {
        Self::NoData {
            field: field.into(),
            errors,
        }
    }

    /// Returns the typed code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Transport(e) if e.is_timeout() => ErrorCode::Timeout,
            Self::Transport(e) if e.is_connect() => ErrorCode::ConnectionRefused,
            Self::Transport(e) if e.is_status() => ErrorCode::HttpError,
            Self::Transport(_) => ErrorCode::NetworkError,
            Self::NoData { .. } => ErrorCode::NoData,
            Self::InvalidResponse(_) => ErrorCode::InvalidResponse,
            Self::Decode { .. } => ErrorCode::DeserializeError,
            Self::InvalidUrl { .. } => ErrorCode::InvalidUrl,
            Self::InvalidHeader { .. } => ErrorCode::InvalidHeader,
        }
    }

    /// Returns true if this is a missing-data failure.
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData { .. })
    }

    /// Returns the HTTP status for non-2xx transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the GraphQL errors that accompanied a missing-data failure.
    pub fn graphql_errors(&self) -> &[GraphQlError] {
        match self {
            Self::NoData { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Returns true if a caller could reasonably retry.
    pub fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }
}

/// Type alias for SDK results.
pub type NotifiResult<T> = std::result::Result<T, NotifiError>;
