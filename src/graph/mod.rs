//! Audio session graph model and analysis.
//!
//! The graph is a transient snapshot of the live audio routing state:
//! nodes are application or device endpoints, links are active routing
//! connections between them. Analysis runs in a fixed pipeline — classify
//! nodes, resolve link endpoints, drop duplicates, extract process names —
//! and tolerates the inconsistencies of a concurrently-mutating source
//! graph (dangling link endpoints, repeated link records, missing
//! properties) without ever failing.

mod extract;
mod link;
mod node;

pub use extract::{
    input_capture_process_names, microphone_access_processes, speaker_access_processes,
};
pub use link::{resolve_links, RawLink, ResolvedLink};
pub use node::{classify, Node, NodeId, NodeProperties, RawNode};
