//! Backend over a generic node/link audio-graph provider.

use std::collections::HashMap;

use super::{AuthorizationStatus, Backend};
use crate::graph::{
    classify, input_capture_process_names, microphone_access_processes, resolve_links,
    speaker_access_processes, Node, NodeId, RawLink, RawNode, ResolvedLink,
};
use crate::result::{QueryResult, SpeakerProcess};

/// Provider of audio-graph snapshots.
///
/// Implementations return the live graph's node and link lists at call
/// time, in enumeration order, and perform no caching of their own
/// (debouncing is layered above, on the monitor). When the underlying
/// service is unreachable they return empty lists rather than failing.
///
/// Snapshot calls must be safe to invoke repeatedly and concurrently with
/// the provider's own graph updates, and must never return a torn node or
/// link record.
pub trait GraphSource: Send + Sync {
    /// Current node list.
    fn nodes(&self) -> Vec<RawNode>;

    /// Current link list.
    fn links(&self) -> Vec<RawLink>;
}

/// Backend that answers queries from a node/link audio graph.
///
/// Each query fetches a fresh snapshot from the source, classifies its
/// nodes, resolves and deduplicates its links, and extracts the answer.
/// The snapshot is discarded immediately afterwards. This backend never
/// returns the failure variant of [`QueryResult`]: an unreadable graph is
/// routine and yields an empty success envelope.
pub struct GraphBackend<S> {
    source: S,
}

impl<S: GraphSource> GraphBackend<S> {
    /// Creates a backend over the given graph source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches a snapshot and runs it through classify → resolve → dedup.
    fn resolved_links(&self) -> Vec<ResolvedLink> {
        let nodes: HashMap<NodeId, Node> = self
            .source
            .nodes()
            .into_iter()
            .map(|raw| {
                let node = classify(raw);
                (node.id, node)
            })
            .collect();

        resolve_links(&nodes, &self.source.links())
    }
}

impl<S: GraphSource> Backend for GraphBackend<S> {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn input_audio_process_names(&self) -> Vec<String> {
        input_capture_process_names(&self.resolved_links())
    }

    fn microphone_access(&self) -> QueryResult<String> {
        QueryResult::success(microphone_access_processes(&self.resolved_links()))
    }

    fn speaker_access(&self) -> QueryResult<SpeakerProcess> {
        let names = speaker_access_processes(&self.resolved_links());
        QueryResult::success(names.into_iter().map(SpeakerProcess::Name).collect())
    }

    fn microphone_authorization(&self) -> AuthorizationStatus {
        // The graph has no authorization gate.
        AuthorizationStatus::Authorized
    }
}
