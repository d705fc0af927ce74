//! Error types for the adapter.

use thiserror::Error;

/// Errors that can occur during adapter operations.
///
/// There is no retry machinery: every variant propagates to the caller
/// unchanged, matching the single round-trip contract of each call.
#[derive(Error, Debug)]
pub enum BlpError {
    /// The vendor session rejected or failed a request.
    /// Raised by `Session` implementations, never by this crate itself.
    #[error("session error: {message}")]
    Session {
        /// Failure description reported by the transport.
        message: String,
    },

    /// Reading or writing a cache file failed.
    #[error("cache I/O error: {0}")]
    Cache(#[from] std::io::Error),

    /// Encoding or decoding a cached table failed.
    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BlpError {
    /// Build a session error from a transport-reported message.
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let error = BlpError::session("service //blp/refdata not opened");
        assert_eq!(
            format!("{}", error),
            "session error: service //blp/refdata not opened"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error = BlpError::from(io);
        assert!(matches!(error, BlpError::Cache(_)));
    }
}
