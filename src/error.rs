//! Error types for audio-usage.
//!
//! Errors are split into two channels:
//! - **Graph channel**: never raises. A partially readable or unreachable
//!   graph yields an empty success envelope.
//! - **Native channel** ([`BackendError`]): structured failures for
//!   conditions that require user action, such as a missing permission.

use crate::result::QueryResult;

/// Informational error code carried by native-backend failure envelopes.
pub const INFO_ERROR_CODE: i32 = 1;

/// Error domain carried by native-backend failure envelopes.
pub const ERROR_DOMAIN: &str = "com.MicrophoneUsageMonitor";

/// Structured failures produced by native (permission-gated) backends.
///
/// Graph-backend queries never return these: an unreadable graph is routine
/// and surfaces as an empty success envelope instead. Native providers
/// convert a `BackendError` into the failure variant of [`QueryResult`]
/// via [`From`].
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Permission to inspect audio sessions was denied.
    ///
    /// On macOS, check System Settings > Privacy & Security > Microphone.
    #[error("microphone access permission denied (check OS privacy settings)")]
    PermissionDenied,

    /// The query is not supported on this platform or configuration.
    #[error("audio session query unsupported: {reason}")]
    Unsupported {
        /// Why the query is unsupported.
        reason: String,
    },

    /// The backend failed to load (missing library, no daemon).
    #[error("audio backend failed to load: {reason}")]
    LoadFailed {
        /// Why the backend could not be loaded.
        reason: String,
    },

    /// Connecting to the audio graph service failed.
    #[error("audio graph connection failed: {reason}")]
    ConnectionFailed {
        /// Why the connection failed.
        reason: String,
    },
}

impl BackendError {
    /// Creates an unsupported-query error with the given reason.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported {
            reason: reason.into(),
        }
    }

    /// Creates a load-failure error with the given reason.
    pub fn load_failed(reason: impl Into<String>) -> Self {
        Self::LoadFailed {
            reason: reason.into(),
        }
    }

    /// Creates a connection-failure error with the given reason.
    pub fn connection_failed(reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            reason: reason.into(),
        }
    }

    /// Returns the integer code carried by the failure envelope.
    #[must_use]
    pub fn code(&self) -> i32 {
        INFO_ERROR_CODE
    }
}

impl<T> From<BackendError> for QueryResult<T> {
    fn from(err: BackendError) -> Self {
        QueryResult::failure(err.to_string(), err.code(), ERROR_DOMAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::unsupported("no session API on this platform");
        assert_eq!(
            err.to_string(),
            "audio session query unsupported: no session API on this platform"
        );
    }

    #[test]
    fn test_backend_error_into_failure_envelope() {
        let result: QueryResult<String> = BackendError::PermissionDenied.into();
        assert!(!result.is_success());
        let (error, code, domain) = result.failure_parts().unwrap();
        assert!(error.contains("permission denied"));
        assert_eq!(code, INFO_ERROR_CODE);
        assert_eq!(domain, ERROR_DOMAIN);
    }

    #[test]
    fn test_error_domain_constant() {
        assert_eq!(ERROR_DOMAIN, "com.MicrophoneUsageMonitor");
        assert_eq!(INFO_ERROR_CODE, 1);
    }
}
