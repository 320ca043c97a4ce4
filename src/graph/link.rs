//! Link resolution and deduplication.

use std::collections::{HashMap, HashSet};

use super::node::{Node, NodeId};

/// A routing connection as enumerated from a graph backend.
///
/// The endpoint ids are weak references into the same snapshot's node set
/// and may dangle if the graph mutated between node and link enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    /// Snapshot-unique link id.
    pub id: u32,
    /// Id of the node the link reads from.
    pub input_node_id: NodeId,
    /// Id of the node the link writes to.
    pub output_node_id: NodeId,
}

/// A link with both endpoints replaced by their classified node data.
///
/// Holds the nodes by value, so it stays valid past the snapshot's
/// lifetime. The originating link id is discarded: the same logical
/// connection may appear under several link records, and resolved links
/// are compared structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLink {
    /// Classified source endpoint.
    pub input: Node,
    /// Classified destination endpoint.
    pub output: Node,
}

/// Resolves raw links against the classified node map, dropping duplicates.
///
/// A link whose input or output id is absent from `nodes` is dropped
/// silently — dangling endpoints are expected under a live, concurrently
/// mutating graph and are not an error. Two resolved links are duplicates
/// iff their (input, output) node values are structurally equal; the first
/// occurrence wins and output order follows first-seen order.
#[must_use]
pub fn resolve_links(nodes: &HashMap<NodeId, Node>, links: &[RawLink]) -> Vec<ResolvedLink> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for link in links {
        let (Some(input), Some(output)) = (
            nodes.get(&link.input_node_id),
            nodes.get(&link.output_node_id),
        ) else {
            continue;
        };

        let candidate = ResolvedLink {
            input: input.clone(),
            output: output.clone(),
        };
        if seen.insert(candidate.clone()) {
            resolved.push(candidate);
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: NodeId, name: &str) -> Node {
        Node {
            id,
            name: name.to_string(),
            is_application: true,
            is_device: false,
        }
    }

    fn device(id: NodeId, name: &str) -> Node {
        Node {
            id,
            name: name.to_string(),
            is_application: false,
            is_device: true,
        }
    }

    fn node_map(nodes: Vec<Node>) -> HashMap<NodeId, Node> {
        nodes.into_iter().map(|n| (n.id, n)).collect()
    }

    fn raw_link(id: u32, input: NodeId, output: NodeId) -> RawLink {
        RawLink {
            id,
            input_node_id: input,
            output_node_id: output,
        }
    }

    #[test]
    fn test_resolve_keeps_valid_links() {
        let nodes = node_map(vec![app(1, "Zoom"), device(2, "Speakers")]);
        let resolved = resolve_links(&nodes, &[raw_link(10, 1, 2)]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].input.name, "Zoom");
        assert_eq!(resolved[0].output.name, "Speakers");
    }

    #[test]
    fn test_dangling_input_dropped_silently() {
        let nodes = node_map(vec![device(2, "Speakers")]);
        let resolved = resolve_links(&nodes, &[raw_link(10, 99, 2)]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_dangling_output_dropped_silently() {
        let nodes = node_map(vec![app(1, "Zoom")]);
        let resolved = resolve_links(&nodes, &[raw_link(10, 1, 99)]);
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_duplicate_links_collapse_regardless_of_link_id() {
        let nodes = node_map(vec![app(1, "Zoom"), device(2, "Speakers")]);
        // Same logical connection reported under three link records.
        let links = [raw_link(10, 1, 2), raw_link(11, 1, 2), raw_link(12, 1, 2)];

        let resolved = resolve_links(&nodes, &links);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let nodes = node_map(vec![
            app(1, "Zoom"),
            app(3, "Firefox"),
            device(2, "Speakers"),
        ]);
        let links = [
            raw_link(10, 1, 2),
            raw_link(11, 3, 2),
            raw_link(12, 1, 2), // duplicate of the first
        ];

        let resolved = resolve_links(&nodes, &links);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].input.name, "Zoom");
        assert_eq!(resolved[1].input.name, "Firefox");
    }

    #[test]
    fn test_distinct_directions_are_distinct_links() {
        let nodes = node_map(vec![app(1, "Zoom"), app(3, "Firefox")]);
        let links = [raw_link(10, 1, 3), raw_link(11, 3, 1)];

        let resolved = resolve_links(&nodes, &links);
        assert_eq!(resolved.len(), 2);
    }
}
