//! Graph nodes and classification.

/// Identifier of a node within a single graph snapshot.
///
/// Unique per snapshot only; the live graph recycles ids over time.
pub type NodeId = u32;

/// Capability properties attached to a raw node.
///
/// Backends fill in whatever the underlying graph exposes for each node.
/// A property that is missing or malformed at the source is simply left
/// `None` — absence is normal, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeProperties {
    /// Application identity (PipeWire `application.name`), present on
    /// application stream nodes.
    pub application_name: Option<String>,
    /// Device description (PipeWire `node.description`), present on
    /// hardware device nodes.
    pub device_description: Option<String>,
}

/// A node as enumerated from a graph backend, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawNode {
    /// Snapshot-unique node id.
    pub id: NodeId,
    /// Node name as reported by the graph.
    pub name: String,
    /// Capability properties used for classification.
    pub properties: NodeProperties,
}

/// A classified graph endpoint.
///
/// The flags are derived independently, so they are not mutually exclusive
/// by construction — a well-formed graph satisfies exactly one, but nothing
/// here enforces it. Equality is structural over all fields; resolved-link
/// deduplication relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    /// Snapshot-unique node id.
    pub id: NodeId,
    /// Node name as reported by the graph.
    pub name: String,
    /// The node carries an application identity property.
    pub is_application: bool,
    /// The node carries a device description property.
    pub is_device: bool,
}

/// Classifies a raw node into a [`Node`].
///
/// Pure function of the node's properties: `is_application` iff an
/// application identity is present, `is_device` iff a device description is
/// present. Missing properties classify as `false`.
#[must_use]
pub fn classify(raw: RawNode) -> Node {
    Node {
        id: raw.id,
        name: raw.name,
        is_application: raw.properties.application_name.is_some(),
        is_device: raw.properties.device_description.is_some(),
    }
}
