//! AlgoViz Graph Primitives
//!
//! Weighted undirected graphs laid out on a 2D plane, shared by the input
//! generator, the pathfinding/graph algorithms, and trace snapshots.
//!
//! # Model
//!
//! A [`Graph`] is a list of [`Node`]s (sequential ids, display labels,
//! float coordinates) and a list of [`Edge`]s. Edges are stored once and
//! traversed symmetrically; self-loops are never constructed.
//!
//! Traversal goes through an [`AdjacencyList`], built once from the edge
//! list with each edge added to both endpoints' neighbor lists.

mod adjacency;
mod graph;
mod node;

pub use adjacency::{AdjacencyList, Neighbor};
pub use graph::{Edge, Graph};
pub use node::{Node, NodeId};
