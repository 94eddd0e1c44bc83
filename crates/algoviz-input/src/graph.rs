//! Connected random graph generation.

use rand::Rng;

use algoviz_graph::{Edge, Graph, Node, NodeId};

use crate::error::{Error, Result};

/// Width of the layout plane.
const PLANE_WIDTH: f64 = 800.0;
/// Height of the layout plane.
const PLANE_HEIGHT: f64 = 600.0;
/// Probability of adding an edge between a candidate node pair.
const EDGE_PROBABILITY: f64 = 0.3;
/// Edge weights are drawn uniformly from 1..=MAX_WEIGHT.
const MAX_WEIGHT: u32 = 10;

/// Generate a connected weighted graph with `size` nodes.
///
/// Nodes get sequential ids, spreadsheet-style labels, and uniform float
/// positions on the plane. Each candidate pair i < j gets an edge with
/// probability [`EDGE_PROBABILITY`]; a repair pass then guarantees every
/// node with index ≥ 1 at least one edge to a lower-indexed node, so the
/// result is connected by construction. No self-loops; each undirected
/// edge is stored once.
pub fn graph<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Graph> {
    if size < 1 {
        return Err(Error::InvalidSize { size });
    }

    let nodes: Vec<Node> = (0..size)
        .map(|i| {
            Node::new(
                NodeId(i),
                rng.gen_range(0.0..PLANE_WIDTH),
                rng.gen_range(0.0..PLANE_HEIGHT),
            )
        })
        .collect();

    let mut edges: Vec<Edge> = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            if rng.gen_bool(EDGE_PROBABILITY) {
                edges.push(Edge::new(
                    NodeId(i),
                    NodeId(j),
                    rng.gen_range(1..=MAX_WEIGHT),
                ));
            }
        }
    }

    let mut graph = Graph::new(nodes, edges);

    // Repair pass: connect every node to the component below it.
    for i in 1..size {
        if !graph.has_edge_to_lower(NodeId(i)) {
            let target = rng.gen_range(0..i);
            graph.edges.push(Edge::new(
                NodeId(i),
                NodeId(target),
                rng.gen_range(1..=MAX_WEIGHT),
            ));
        }
    }

    Ok(graph)
}
