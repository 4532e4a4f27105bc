//! Gateway failures. Every variant carries the name of the operation that was attempted,
//! so call sites can log and notify without matching on the variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("{operation} failed: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The gateway answered with a non-2xx status.
    #[error("{operation} failed: server returned {status}")]
    Http {
        operation: &'static str,
        status: u16,
        body: String,
    },
    /// 2xx response whose body is not the expected JSON.
    #[error("{operation} failed: malformed response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse failure taxonomy used for user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    HttpFailure,
}

impl GatewayError {
    pub fn operation(&self) -> &'static str {
        match self {
            GatewayError::Network { operation, .. }
            | GatewayError::Http { operation, .. }
            | GatewayError::Decode { operation, .. } => operation,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Network { .. } => ErrorKind::NetworkFailure,
            GatewayError::Http { .. } | GatewayError::Decode { .. } => ErrorKind::HttpFailure,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
