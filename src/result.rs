//! The uniform envelope returned by every public query.

/// Tagged success/failure envelope for audio usage queries.
///
/// Every public query returns one of these. The success variant always
/// carries a (possibly empty) list of processes; the failure variant carries
/// a non-empty message plus the integer code and domain string of the
/// producing backend.
///
/// Only native (permission-gated) backends ever produce the failure variant.
/// Code that exclusively uses the graph path can assume success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult<T> {
    /// The query ran; zero or more processes matched.
    Success {
        /// Processes matching the query, in graph order.
        processes: Vec<T>,
    },
    /// A native backend could not answer the query.
    Failure {
        /// Human-readable description of what went wrong.
        error: String,
        /// Backend-defined integer code.
        code: i32,
        /// Backend-defined error domain.
        domain: String,
    },
}

impl<T> QueryResult<T> {
    /// Creates a success envelope with the given processes.
    #[must_use]
    pub fn success(processes: Vec<T>) -> Self {
        Self::Success { processes }
    }

    /// Creates a success envelope with no processes.
    ///
    /// This is the answer for "nothing is active right now" and for every
    /// query against the no-op backend.
    #[must_use]
    pub fn empty() -> Self {
        Self::Success {
            processes: Vec::new(),
        }
    }

    /// Creates a failure envelope.
    #[must_use]
    pub fn failure(error: impl Into<String>, code: i32, domain: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
            code,
            domain: domain.into(),
        }
    }

    /// Returns `true` for the success variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the matched processes, or `None` for a failure envelope.
    #[must_use]
    pub fn processes(&self) -> Option<&[T]> {
        match self {
            Self::Success { processes } => Some(processes),
            Self::Failure { .. } => None,
        }
    }

    /// Consumes the envelope, returning the matched processes if successful.
    #[must_use]
    pub fn into_processes(self) -> Option<Vec<T>> {
        match self {
            Self::Success { processes } => Some(processes),
            Self::Failure { .. } => None,
        }
    }

    /// Returns `(error, code, domain)` for a failure envelope.
    #[must_use]
    pub fn failure_parts(&self) -> Option<(&str, i32, &str)> {
        match self {
            Self::Success { .. } => None,
            Self::Failure {
                error,
                code,
                domain,
            } => Some((error, *code, domain)),
        }
    }
}

/// A process rendering to speakers.
///
/// The graph path only knows the application name. Native providers that
/// walk OS render sessions (Windows) can pair the process with the output
/// device it is rendering to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakerProcess {
    /// Application name only, as reported by the audio graph.
    Name(String),
    /// Full render-session record from a native session API.
    Session {
        /// Executable or application name.
        process_name: String,
        /// OS process id, when the session API exposes it.
        process_id: Option<u32>,
        /// Friendly name of the output device the session renders to.
        device_name: String,
        /// Whether the session is currently audible (active and unmuted).
        is_active: bool,
    },
}

impl SpeakerProcess {
    /// Returns the process name regardless of variant.
    #[must_use]
    pub fn process_name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Session { process_name, .. } => process_name,
        }
    }
}
