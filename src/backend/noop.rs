//! Fallback backend for unsupported platforms.

use super::{AuthorizationStatus, Backend};
use crate::result::{QueryResult, SpeakerProcess};

/// Backend substituted when no real backend is available.
///
/// Every query returns a well-formed empty success envelope — never the
/// failure variant, never a panic. This keeps the public surface
/// platform-detection-free: callers on an unsupported OS see "nothing is
/// active" rather than an error they cannot act on.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpBackend;

impl Backend for NoOpBackend {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn input_audio_process_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn microphone_access(&self) -> QueryResult<String> {
        QueryResult::empty()
    }

    fn speaker_access(&self) -> QueryResult<SpeakerProcess> {
        QueryResult::empty()
    }

    fn microphone_authorization(&self) -> AuthorizationStatus {
        AuthorizationStatus::Authorized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_query_is_empty_success() {
        let backend = NoOpBackend;

        assert!(backend.input_audio_process_names().is_empty());

        let mic = backend.microphone_access();
        assert!(mic.is_success());
        assert!(mic.processes().unwrap().is_empty());

        let speakers = backend.speaker_access();
        assert!(speakers.is_success());
        assert!(speakers.processes().unwrap().is_empty());
    }

    #[test]
    fn test_authorization_reports_authorized() {
        assert_eq!(
            NoOpBackend.microphone_authorization(),
            AuthorizationStatus::Authorized
        );
    }
}
