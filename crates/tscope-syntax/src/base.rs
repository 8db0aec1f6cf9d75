//! Node handles.

use serde::Serialize;

/// Index of a node in a `NodeArena`.
///
/// Frontends must hand the analyzer stable indices: a node keeps its index
/// for the lifetime of its arena, so back-references from analysis results
/// into the tree stay valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for an absent child slot.
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for NodeIndex {
    fn default() -> NodeIndex {
        NodeIndex::NONE
    }
}

/// An ordered list of child nodes.
///
/// Array-pattern holes are represented as `NodeIndex::NONE` entries so that
/// element positions stay meaningful.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    pub fn from_nodes(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeIndex> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a NodeIndex;
    type IntoIter = std::slice::Iter<'a, NodeIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
