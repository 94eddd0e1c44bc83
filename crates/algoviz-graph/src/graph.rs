//! Graph container: node and edge lists.

use crate::node::{Node, NodeId};

/// An undirected weighted edge, stored once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    /// Positive traversal cost.
    pub weight: u32,
}

impl Edge {
    /// Create an edge.
    pub const fn new(source: NodeId, target: NodeId, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint at all.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.source == id {
            Some(self.target)
        } else if self.target == id {
            Some(self.source)
        } else {
            None
        }
    }
}

/// A weighted undirected graph laid out on the plane.
///
/// Node ids are sequential from zero and equal to their index in `nodes`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph from node and edge lists.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored edges (each undirected edge counted once).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Display label for a node id, for step narration.
    pub fn label(&self, id: NodeId) -> &str {
        self.node(id).map(|n| n.label.as_str()).unwrap_or("?")
    }

    /// Check whether `id` has an edge to any lower-indexed node.
    ///
    /// The generator's repair pass relies on this to guarantee
    /// connectivity by construction.
    pub fn has_edge_to_lower(&self, id: NodeId) -> bool {
        self.edges.iter().any(|e| {
            (e.source == id && e.target.0 < id.0) || (e.target == id && e.source.0 < id.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let nodes = (0..3).map(|i| Node::new(NodeId(i), i as f64, 0.0)).collect();
        let edges = vec![
            Edge::new(NodeId(0), NodeId(1), 2),
            Edge::new(NodeId(1), NodeId(2), 3),
            Edge::new(NodeId(0), NodeId(2), 7),
        ];
        Graph::new(nodes, edges)
    }

    #[test]
    fn counts() {
        let g = triangle();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert!(!g.is_empty());
        assert!(Graph::default().is_empty());
    }

    #[test]
    fn edge_other_endpoint() {
        let e = Edge::new(NodeId(1), NodeId(4), 1);
        assert_eq!(e.other(NodeId(1)), Some(NodeId(4)));
        assert_eq!(e.other(NodeId(4)), Some(NodeId(1)));
        assert_eq!(e.other(NodeId(2)), None);
    }

    #[test]
    fn lower_index_connectivity() {
        let g = triangle();
        assert!(g.has_edge_to_lower(NodeId(1)));
        assert!(g.has_edge_to_lower(NodeId(2)));
        assert!(!g.has_edge_to_lower(NodeId(0)));
    }

    #[test]
    fn labels_resolve() {
        let g = triangle();
        assert_eq!(g.label(NodeId(0)), "A");
        assert_eq!(g.label(NodeId(2)), "C");
        assert_eq!(g.label(NodeId(9)), "?");
    }
}
