//! The public query surface.

use std::time::Duration;

use parking_lot::Mutex;

use crate::backend::{create_backend, AuthorizationStatus, Backend};
use crate::debounce::{Debounce, DEFAULT_DEBOUNCE_WINDOW};
use crate::result::{QueryResult, SpeakerProcess};

/// Uniform, always-available audio usage query surface.
///
/// A monitor holds exactly one [`Backend`], selected at construction and
/// never swapped. Every operation is defined on every platform: where no
/// real backend exists, queries answer with well-formed empty success
/// envelopes instead of errors, so callers never branch on the platform.
///
/// All operations are synchronous and run to completion; the only temporal
/// control is the debounce window on
/// [`microphone_access_debounced`](Self::microphone_access_debounced).
///
/// # Example
///
/// ```
/// use audio_usage::UsageMonitor;
///
/// let monitor = UsageMonitor::new();
/// let speakers = monitor.speaker_access();
/// assert!(speakers.is_success() || speakers.failure_parts().is_some());
/// ```
pub struct UsageMonitor {
    backend: Box<dyn Backend>,
    mic_debounce: Mutex<Debounce<QueryResult<String>>>,
}

impl UsageMonitor {
    /// Creates a monitor over the platform-selected backend.
    ///
    /// See [`create_backend`] for the selection rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(create_backend())
    }

    /// Creates a monitor over a caller-supplied backend.
    ///
    /// This is how native (permission-gated) providers and test doubles
    /// are plugged in.
    #[must_use]
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        tracing::debug!(backend = backend.name(), "usage monitor created");
        Self {
            backend,
            mic_debounce: Mutex::new(Debounce::new(DEFAULT_DEBOUNCE_WINDOW)),
        }
    }

    /// Overrides the debounce window (default 1000 ms).
    ///
    /// Resets the cache slot, so the next debounced call recomputes.
    #[must_use]
    pub fn with_debounce_window(self, window: Duration) -> Self {
        Self {
            backend: self.backend,
            mic_debounce: Mutex::new(Debounce::new(window)),
        }
    }

    /// Name of the selected backend, for logging/debugging.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Raw, unenveloped list of processes feeding audio into the graph.
    #[must_use]
    pub fn input_audio_process_names(&self) -> Vec<String> {
        self.backend.input_audio_process_names()
    }

    /// Processes currently capturing the microphone.
    #[must_use]
    pub fn microphone_access(&self) -> QueryResult<String> {
        self.backend.microphone_access()
    }

    /// Processes currently capturing the microphone, debounced.
    ///
    /// Within the debounce window the previously cached envelope is
    /// returned unchanged, even if the graph has moved on; once the window
    /// elapses the next call recomputes from a fresh snapshot. Intended
    /// for polling callers that would otherwise pay for a full
    /// snapshot+classify+resolve+extract cycle per tick.
    #[must_use]
    pub fn microphone_access_debounced(&self) -> QueryResult<String> {
        self.mic_debounce
            .lock()
            .get(|| self.backend.microphone_access())
    }

    /// Processes currently rendering to speakers.
    #[must_use]
    pub fn speaker_access(&self) -> QueryResult<SpeakerProcess> {
        self.backend.speaker_access()
    }

    /// Current microphone authorization state.
    #[must_use]
    pub fn microphone_authorization(&self) -> AuthorizationStatus {
        self.backend.microphone_authorization()
    }
}

impl Default for UsageMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{GraphBackend, MockGraph, NoOpBackend};

    #[test]
    fn test_noop_monitor_is_fully_defined() {
        let monitor = UsageMonitor::with_backend(Box::new(NoOpBackend));

        assert_eq!(monitor.backend_name(), "noop");
        assert!(monitor.input_audio_process_names().is_empty());
        assert!(monitor.microphone_access().is_success());
        assert!(monitor.microphone_access_debounced().is_success());
        assert!(monitor.speaker_access().is_success());
        assert_eq!(
            monitor.microphone_authorization(),
            AuthorizationStatus::Authorized
        );
    }

    #[test]
    fn test_debounced_and_plain_agree_on_stable_graph() {
        let graph = MockGraph::new();
        let zoom = graph.add_application(1, "Zoom");
        let mic = graph.add_device(2, "Mic");
        graph.add_link(10, zoom, mic);

        let monitor = UsageMonitor::with_backend(Box::new(GraphBackend::new(graph)));
        assert_eq!(monitor.microphone_access(), monitor.microphone_access_debounced());
    }

    #[test]
    fn test_debounce_window_caches_across_graph_change() {
        let graph = MockGraph::new();
        let mic = graph.add_device(2, "Mic");
        let monitor = UsageMonitor::with_backend(Box::new(GraphBackend::new(graph.clone())));

        let first = monitor.microphone_access_debounced();
        assert!(first.processes().unwrap().is_empty());

        let zoom = graph.add_application(1, "Zoom");
        graph.add_link(10, zoom, mic);

        // Still inside the 1000 ms window: cached empty result.
        let second = monitor.microphone_access_debounced();
        assert_eq!(first, second);

        // The undebounced query sees the new link immediately.
        assert_eq!(monitor.microphone_access().processes().unwrap(), ["Zoom"]);
    }
}
