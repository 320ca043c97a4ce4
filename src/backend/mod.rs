//! Query backend abstraction and platform selection.
//!
//! A backend answers the audio usage queries for one platform or data
//! source. Exactly one is selected per monitor; when no real backend is
//! available the no-op backend is substituted so that the public surface
//! stays fully defined on every platform.

mod graph;
mod mock;
mod noop;
#[cfg(all(target_os = "linux", feature = "pipewire"))]
mod pipewire;

pub use graph::{GraphBackend, GraphSource};
pub use mock::MockGraph;
pub use noop::NoOpBackend;
#[cfg(all(target_os = "linux", feature = "pipewire"))]
pub use pipewire::PipeWireGraph;

use crate::result::{QueryResult, SpeakerProcess};

/// Microphone authorization state as reported by the OS.
///
/// Graph and no-op backends report [`Authorized`](Self::Authorized): the
/// graph has no authorization gate, and the no-op backend never blocks a
/// caller on a permission it cannot check. Native providers report the
/// real OS state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet.
    NotDetermined,
    /// The OS does not permit this process to use the microphone.
    Restricted,
    /// The user explicitly denied access.
    Denied,
    /// The user explicitly granted access.
    Authorized,
}

impl AuthorizationStatus {
    /// Returns the canonical string form of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotDetermined => "NotDetermined",
            Self::Restricted => "Restricted",
            Self::Denied => "Denied",
            Self::Authorized => "Authorized",
        }
    }
}

/// Answers the audio usage queries for one platform or data source.
///
/// Implementations fall into two channels with different error contracts:
/// graph-derived backends ([`GraphBackend`], [`NoOpBackend`]) never return
/// the failure variant of [`QueryResult`]; native providers performing
/// permission-gated OS session queries may.
pub trait Backend: Send + Sync {
    /// Backend name for logging/debugging.
    fn name(&self) -> &'static str;

    /// Raw, unenveloped list of processes feeding audio into the graph.
    fn input_audio_process_names(&self) -> Vec<String>;

    /// Processes currently capturing the microphone.
    fn microphone_access(&self) -> QueryResult<String>;

    /// Processes currently rendering to speakers.
    fn speaker_access(&self) -> QueryResult<SpeakerProcess>;

    /// Current microphone authorization state.
    fn microphone_authorization(&self) -> AuthorizationStatus;
}

/// Selects the backend for the current platform.
///
/// On Linux with the `pipewire` feature this connects to the PipeWire
/// registry and returns a [`GraphBackend`] over it. On any other platform,
/// or whenever the graph service is unreachable (no daemon, missing
/// library), it silently substitutes [`NoOpBackend`] — selection failure
/// is never surfaced to the caller.
#[must_use]
pub fn create_backend() -> Box<dyn Backend> {
    #[cfg(all(target_os = "linux", feature = "pipewire"))]
    {
        if let Some(source) = pipewire::PipeWireGraph::connect() {
            return Box::new(GraphBackend::new(source));
        }
        tracing::warn!("PipeWire unavailable, substituting no-op backend");
    }

    Box::new(NoOpBackend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_status_strings() {
        assert_eq!(AuthorizationStatus::NotDetermined.as_str(), "NotDetermined");
        assert_eq!(AuthorizationStatus::Restricted.as_str(), "Restricted");
        assert_eq!(AuthorizationStatus::Denied.as_str(), "Denied");
        assert_eq!(AuthorizationStatus::Authorized.as_str(), "Authorized");
    }

    #[test]
    fn test_create_backend_always_yields_a_backend() {
        // Whatever the platform and the state of the graph service, the
        // selector must produce a backend whose graph-channel queries
        // succeed.
        let backend = create_backend();
        assert!(backend.microphone_access().is_success());
        assert!(backend.speaker_access().is_success());
    }
}
