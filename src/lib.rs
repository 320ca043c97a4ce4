//! # audio-usage
//!
//! On-demand reporting of which application processes are currently
//! capturing the microphone or rendering to speakers.
//!
//! `audio-usage` models the live audio session graph (nodes are application
//! or device endpoints, links are active routing connections), classifies
//! nodes, resolves and deduplicates links, and answers "who is using the
//! mic/speakers" behind a uniform query surface that is always defined —
//! on platforms without a usable backend it degrades to well-formed empty
//! results rather than failing.
//!
//! ## Quick Start
//!
//! ```
//! use audio_usage::UsageMonitor;
//!
//! let monitor = UsageMonitor::new();
//!
//! let result = monitor.microphone_access();
//! if let Some(processes) = result.processes() {
//!     for name in processes {
//!         println!("capturing the mic: {name}");
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! Exactly one [`Backend`] is selected when a monitor is created:
//!
//! - **Graph backend** (Linux, `pipewire` feature): mirrors the PipeWire
//!   registry from a background thread and extracts answers from the
//!   node/link graph. This channel never produces a failure envelope.
//! - **No-op backend**: substituted on any unsupported or unavailable
//!   platform; every query returns an empty success envelope.
//! - **Native backends**: integrator-supplied providers for permission-gated
//!   OS session APIs, plugged in via [`UsageMonitor::with_backend`]. Only
//!   this channel may return the failure variant of [`QueryResult`].
//!
//! Repeated polling is bounded by a single-slot debounce cache
//! (see [`UsageMonitor::microphone_access_debounced`]).

#![warn(missing_docs)]

mod backend;
mod debounce;
mod error;
pub mod graph;
mod monitor;
mod result;

pub use backend::{
    create_backend, AuthorizationStatus, Backend, GraphBackend, GraphSource, MockGraph,
    NoOpBackend,
};
pub use debounce::{Debounce, DEFAULT_DEBOUNCE_WINDOW};
pub use error::{BackendError, ERROR_DOMAIN, INFO_ERROR_CODE};
pub use monitor::UsageMonitor;
pub use result::{QueryResult, SpeakerProcess};

#[cfg(all(target_os = "linux", feature = "pipewire"))]
pub use backend::PipeWireGraph;
