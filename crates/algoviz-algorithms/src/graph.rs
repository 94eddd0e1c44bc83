//! Instrumented graph traversals (BFS, DFS) from node 0.

use std::collections::VecDeque;

use algoviz_graph::{AdjacencyList, Graph, NodeId};
use algoviz_trace::{Trace, TraceRecorder, TraceStep};

/// Breadth-first search with a FIFO queue seeded with node 0.
///
/// Each dequeued node gets a "processing" step; each neighbor check
/// charges one comparison and emits either a "discovered" or an "already
/// visited" step.
pub fn bfs(graph: &Graph) -> Trace {
    let mut rec = TraceRecorder::new();
    let n = graph.node_count();
    let start = 0;

    let adjacency = AdjacencyList::build(graph);
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut queue: VecDeque<usize> = VecDeque::from([start]);

    rec.push(TraceStep {
        graph: Some(graph.clone()),
        current: vec![start],
        visited: vec![start],
        description: format!("Starting BFS from node {}", graph.label(NodeId(start))),
        ..TraceStep::default()
    });

    while let Some(current) = queue.pop_front() {
        rec.count_accesses(1);
        let visited_now = visited_ids(&visited);

        rec.push(TraceStep {
            graph: Some(graph.clone()),
            current: vec![current],
            visited: visited_now.clone(),
            description: format!("Processing node {}", graph.label(NodeId(current))),
            ..TraceStep::default()
        });

        for neighbor in adjacency.neighbors(NodeId(current)) {
            let next = neighbor.node.0;
            rec.count_comparisons(1);

            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);

                let mut with_next = visited_now.clone();
                with_next.push(next);
                rec.push(TraceStep {
                    graph: Some(graph.clone()),
                    current: vec![current],
                    comparing: vec![next],
                    visited: with_next,
                    description: format!(
                        "Discovered new node {} from {}",
                        graph.label(NodeId(next)),
                        graph.label(NodeId(current))
                    ),
                    ..TraceStep::default()
                });
            } else {
                rec.push(TraceStep {
                    graph: Some(graph.clone()),
                    current: vec![current],
                    comparing: vec![next],
                    visited: visited_now.clone(),
                    description: format!("Node {} already visited", graph.label(NodeId(next))),
                    ..TraceStep::default()
                });
            }
        }
    }

    let all_visited = visited_ids(&visited);
    rec.push(TraceStep {
        graph: Some(graph.clone()),
        visited: all_visited.clone(),
        description: format!("BFS completed, visited {} nodes", all_visited.len()),
        ..TraceStep::default()
    });

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), "bfs trace recorded");
    trace
}

/// Depth-first search, recursive from node 0.
///
/// Emits a "visiting" step on entry to each node; each neighbor check
/// charges one comparison and emits either an "exploring unvisited" step
/// (followed by the recursive call's own steps) or an "already visited"
/// step.
pub fn dfs(graph: &Graph) -> Trace {
    let mut rec = TraceRecorder::new();
    let n = graph.node_count();
    let start = 0;

    let adjacency = AdjacencyList::build(graph);
    let mut visited = vec![false; n];

    rec.push(TraceStep {
        graph: Some(graph.clone()),
        current: vec![start],
        description: format!("Starting DFS from node {}", graph.label(NodeId(start))),
        ..TraceStep::default()
    });

    dfs_visit(start, graph, &adjacency, &mut visited, &mut rec);

    let all_visited = visited_ids(&visited);
    rec.push(TraceStep {
        graph: Some(graph.clone()),
        visited: all_visited.clone(),
        description: format!("DFS completed, visited {} nodes", all_visited.len()),
        ..TraceStep::default()
    });

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), "dfs trace recorded");
    trace
}

fn dfs_visit(
    node: usize,
    graph: &Graph,
    adjacency: &AdjacencyList,
    visited: &mut Vec<bool>,
    rec: &mut TraceRecorder,
) {
    visited[node] = true;
    rec.count_accesses(1);
    let visited_now = visited_ids(visited);

    rec.push(TraceStep {
        graph: Some(graph.clone()),
        current: vec![node],
        visited: visited_now.clone(),
        description: format!("Visiting node {}", graph.label(NodeId(node))),
        ..TraceStep::default()
    });

    for neighbor in adjacency.neighbors(NodeId(node)) {
        let next = neighbor.node.0;
        rec.count_comparisons(1);

        if !visited[next] {
            rec.push(TraceStep {
                graph: Some(graph.clone()),
                current: vec![node],
                comparing: vec![next],
                visited: visited_now.clone(),
                description: format!(
                    "Exploring unvisited neighbor {} from {}",
                    graph.label(NodeId(next)),
                    graph.label(NodeId(node))
                ),
                ..TraceStep::default()
            });

            dfs_visit(next, graph, adjacency, visited, rec);
        } else {
            rec.push(TraceStep {
                graph: Some(graph.clone()),
                current: vec![node],
                comparing: vec![next],
                visited: visited_now.clone(),
                description: format!("Node {} already visited", graph.label(NodeId(next))),
                ..TraceStep::default()
            });
        }
    }
}

/// Indices of the set bits in a visited-flag array.
fn visited_ids(visited: &[bool]) -> Vec<usize> {
    visited
        .iter()
        .enumerate()
        .filter_map(|(i, &seen)| seen.then_some(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_graph::{Edge, Node};

    fn path_graph(n: usize) -> Graph {
        let nodes = (0..n).map(|i| Node::new(NodeId(i), i as f64, 0.0)).collect();
        let edges = (1..n)
            .map(|i| Edge::new(NodeId(i - 1), NodeId(i), 1))
            .collect();
        Graph::new(nodes, edges)
    }

    /// Order in which "Visiting"/"Processing" steps touch nodes.
    fn visit_order(trace: &Trace, marker: &str) -> Vec<usize> {
        trace
            .iter()
            .filter(|s| s.description.starts_with(marker))
            .map(|s| s.current[0])
            .collect()
    }

    #[test]
    fn bfs_visits_path_graph_in_order() {
        let trace = bfs(&path_graph(5));

        assert_eq!(visit_order(&trace, "Processing node"), vec![0, 1, 2, 3, 4]);
        let last = trace.last().unwrap();
        assert_eq!(last.description, "BFS completed, visited 5 nodes");
        assert_eq!(last.visited, vec![0, 1, 2, 3, 4]);
        assert!(trace.check_invariants().is_ok());
    }

    #[test]
    fn bfs_distinguishes_discovered_from_revisited() {
        let trace = bfs(&path_graph(3));

        assert!(trace
            .iter()
            .any(|s| s.description == "Discovered new node B from A"));
        // B's scan sees A again.
        assert!(trace.iter().any(|s| s.description == "Node A already visited"));
    }

    #[test]
    fn dfs_goes_deep_first() {
        // Star plus a tail: A-B, A-C, B-D. DFS from A must finish B's
        // branch (including D) before C.
        let nodes = (0..4).map(|i| Node::new(NodeId(i), i as f64, 0.0)).collect();
        let edges = vec![
            Edge::new(NodeId(0), NodeId(1), 1),
            Edge::new(NodeId(0), NodeId(2), 1),
            Edge::new(NodeId(1), NodeId(3), 1),
        ];
        let trace = dfs(&Graph::new(nodes, edges));

        assert_eq!(visit_order(&trace, "Visiting node"), vec![0, 1, 3, 2]);
        assert_eq!(
            trace.last().unwrap().description,
            "DFS completed, visited 4 nodes"
        );
        assert!(trace.check_invariants().is_ok());
    }

    #[test]
    fn single_node_traversals() {
        let graph = path_graph(1);

        let trace = bfs(&graph);
        assert_eq!(trace.last().unwrap().description, "BFS completed, visited 1 nodes");

        let trace = dfs(&graph);
        assert_eq!(trace.last().unwrap().description, "DFS completed, visited 1 nodes");
    }

    #[test]
    fn traversal_comparison_counts() {
        // Path 0-1-2: adjacency degrees 1, 2, 1 = 4 neighbor checks.
        let trace = bfs(&path_graph(3));
        assert_eq!(trace.last().unwrap().stats.comparisons, 4);

        let trace = dfs(&path_graph(3));
        assert_eq!(trace.last().unwrap().stats.comparisons, 4);
    }
}
