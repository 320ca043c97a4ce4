//! Mock audio graph for testing without a live audio service.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::graph::GraphSource;
use crate::graph::{NodeProperties, RawLink, RawNode};

/// An in-memory, mutable audio graph.
///
/// This allows testing the full classify/resolve/extract pipeline without
/// a running audio service, making it suitable for CI environments. Clones
/// share the same underlying graph, so a test can keep one handle to
/// mutate the graph while a [`GraphBackend`](super::GraphBackend) queries
/// another.
///
/// # Example
///
/// ```
/// use audio_usage::{GraphBackend, MockGraph, Backend};
///
/// let graph = MockGraph::new();
/// let zoom = graph.add_application(1, "Zoom");
/// let speakers = graph.add_device(2, "Speakers");
/// graph.add_link(10, zoom, speakers);
///
/// let backend = GraphBackend::new(graph);
/// let result = backend.microphone_access();
/// assert_eq!(result.processes().unwrap(), ["Zoom"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockGraph {
    inner: Arc<Mutex<MockGraphInner>>,
}

#[derive(Debug, Default)]
struct MockGraphInner {
    nodes: BTreeMap<u32, RawNode>,
    links: BTreeMap<u32, RawLink>,
}

impl MockGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an application node (carries an application identity property).
    ///
    /// Returns the node id for linking.
    pub fn add_application(&self, id: u32, name: &str) -> u32 {
        self.add_node(RawNode {
            id,
            name: name.to_string(),
            properties: NodeProperties {
                application_name: Some(name.to_string()),
                device_description: None,
            },
        })
    }

    /// Adds a device node (carries a device description property).
    ///
    /// Returns the node id for linking.
    pub fn add_device(&self, id: u32, name: &str) -> u32 {
        self.add_node(RawNode {
            id,
            name: name.to_string(),
            properties: NodeProperties {
                application_name: None,
                device_description: Some(name.to_string()),
            },
        })
    }

    /// Adds a raw node as-is, returning its id.
    pub fn add_node(&self, node: RawNode) -> u32 {
        let id = node.id;
        self.inner.lock().nodes.insert(id, node);
        id
    }

    /// Adds a link between two node ids.
    ///
    /// The endpoints are not validated: a link to a missing node id is
    /// exactly the dangling-reference case the resolver must drop.
    pub fn add_link(&self, id: u32, input_node_id: u32, output_node_id: u32) {
        self.inner.lock().links.insert(
            id,
            RawLink {
                id,
                input_node_id,
                output_node_id,
            },
        );
    }

    /// Removes a node, leaving any links to it dangling.
    pub fn remove_node(&self, id: u32) {
        self.inner.lock().nodes.remove(&id);
    }

    /// Removes a link.
    pub fn remove_link(&self, id: u32) {
        self.inner.lock().links.remove(&id);
    }

    /// Removes all nodes and links.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.nodes.clear();
        inner.links.clear();
    }
}

impl GraphSource for MockGraph {
    fn nodes(&self) -> Vec<RawNode> {
        self.inner.lock().nodes.values().cloned().collect()
    }

    fn links(&self) -> Vec<RawLink> {
        self.inner.lock().links.values().cloned().collect()
    }
}
