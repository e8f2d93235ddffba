//! Errors reported by a [`Transport`](crate::Transport).

use thiserror::Error;

/// Network-level failures.
///
/// These are never retried by the request builder; retrying, if any, is the
/// transport's own business.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to reach the server. Used by transports not built on reqwest.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl TransportError {
    /// Returns `true` if the failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_display() {
        let err = TransportError::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: connection refused");
        assert!(!err.is_timeout());
    }
}
