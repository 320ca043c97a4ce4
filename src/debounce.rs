//! Time-windowed memoization for polling callers.

use std::time::{Duration, Instant};

/// Default debounce window for the debounced query surface (1 second).
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(1000);

/// Single-slot, time-windowed cache around a zero-argument computation.
///
/// On each [`get`](Debounce::get): if the cache has never been filled, or
/// more than the window has elapsed since the last recomputation, the
/// computation runs again and its value is cached; otherwise the cached
/// value is returned unchanged. This bounds the cost of repeated
/// snapshot+classify+resolve+extract cycles for polling callers without
/// requiring them to manage timers.
///
/// Independent instances do not coordinate; each holds its own window.
///
/// # Example
///
/// ```
/// use audio_usage::Debounce;
/// use std::time::Duration;
///
/// let mut cache = Debounce::new(Duration::from_millis(50));
/// let first = cache.get(|| 1);
/// let second = cache.get(|| 2); // within the window: cached
/// assert_eq!(first, 1);
/// assert_eq!(second, 1);
/// ```
#[derive(Debug)]
pub struct Debounce<T> {
    window: Duration,
    slot: Option<(Instant, T)>,
}

impl<T: Clone> Debounce<T> {
    /// Creates an empty cache with the given window.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, slot: None }
    }

    /// Returns the cached value, recomputing it if the window has elapsed.
    pub fn get(&mut self, recompute: impl FnOnce() -> T) -> T {
        let now = Instant::now();
        if let Some((cached_at, value)) = &self.slot {
            if now.duration_since(*cached_at) <= self.window {
                return value.clone();
            }
        }
        let value = recompute();
        self.slot = Some((now, value.clone()));
        value
    }

    /// Returns the configured window.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl<T: Clone> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}
