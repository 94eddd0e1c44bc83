//! Adjacency lists for symmetric traversal of stored-once edges.

use crate::graph::Graph;
use crate::node::NodeId;

/// One traversable neighbor: the opposite endpoint and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: u32,
}

/// Per-node neighbor lists, built once from a graph's edge list.
///
/// Every edge is added to both endpoints' lists, so undirected traversal
/// never has to scan the edge list again. Neighbor order follows edge
/// order, which keeps traversals deterministic for a given graph.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    lists: Vec<Vec<Neighbor>>,
}

impl AdjacencyList {
    /// Build adjacency lists for `graph`.
    pub fn build(graph: &Graph) -> Self {
        let mut lists = vec![Vec::new(); graph.node_count()];

        for edge in &graph.edges {
            lists[edge.source.0].push(Neighbor {
                node: edge.target,
                weight: edge.weight,
            });
            lists[edge.target.0].push(Neighbor {
                node: edge.source,
                weight: edge.weight,
            });
        }

        Self { lists }
    }

    /// Neighbors of `id`, in edge order.
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        self.lists.get(id.0).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Check if no nodes are covered.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
