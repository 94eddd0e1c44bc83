//! Instrumented pathfinding algorithms.
//!
//! Both routines search from node 0 to the highest-numbered node, with
//! the path highlight showing the predecessor chain reconstructed so far.

use algoviz_graph::{AdjacencyList, Graph, NodeId};
use algoviz_trace::{Trace, TraceRecorder, TraceStep};

/// Unreached tentative distance.
const UNREACHED: u64 = u64::MAX;

/// Dijkstra's algorithm with array-based minimum extraction.
///
/// Every minimum scan charges one comparison per node, visited or not;
/// every relaxation charges two accesses and one comparison and emits a
/// step whether or not it improved the distance.
pub fn dijkstra(graph: &Graph) -> Trace {
    let mut rec = TraceRecorder::new();
    let n = graph.node_count();
    let start = 0;
    let end = n - 1;

    let adjacency = AdjacencyList::build(graph);
    let mut distances = vec![UNREACHED; n];
    distances[start] = 0;
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut visited = vec![false; n];

    rec.push(TraceStep {
        graph: Some(graph.clone()),
        current: vec![start],
        description: format!(
            "Starting Dijkstra's algorithm from node {}",
            graph.label(NodeId(start))
        ),
        ..TraceStep::default()
    });

    for _ in 0..n {
        // Scan all unvisited nodes for the minimum tentative distance.
        let mut min_distance = UNREACHED;
        let mut min_index = None;
        for j in 0..n {
            rec.count_comparisons(1);
            if !visited[j] && distances[j] < min_distance {
                min_distance = distances[j];
                min_index = Some(j);
            }
        }

        let Some(current) = min_index else {
            rec.push(TraceStep {
                graph: Some(graph.clone()),
                visited: visited_ids(&visited),
                description: "No further nodes are reachable".into(),
                ..TraceStep::default()
            });
            break;
        };

        visited[current] = true;
        let visited_now = visited_ids(&visited);
        let path = reconstruct_path(&previous, current);

        rec.push(TraceStep {
            graph: Some(graph.clone()),
            current: vec![current],
            visited: visited_now.clone(),
            path: path.clone(),
            description: format!(
                "Visiting node {} with distance {}",
                graph.label(NodeId(current)),
                distances[current]
            ),
            ..TraceStep::default()
        });

        if current == end {
            rec.push(TraceStep {
                graph: Some(graph.clone()),
                current: vec![end],
                visited: visited_now,
                path: reconstruct_path(&previous, end),
                description: format!(
                    "Reached target node {} with total distance {}",
                    graph.label(NodeId(end)),
                    distances[end]
                ),
                ..TraceStep::default()
            });
            break;
        }

        for neighbor in adjacency.neighbors(NodeId(current)) {
            rec.count_accesses(2);
            rec.count_comparisons(1);

            let next = neighbor.node.0;
            let alt = distances[current] + neighbor.weight as u64;

            if alt < distances[next] {
                distances[next] = alt;
                previous[next] = Some(current);
                rec.push(TraceStep {
                    graph: Some(graph.clone()),
                    current: vec![current],
                    comparing: vec![next],
                    visited: visited_now.clone(),
                    path: reconstruct_path(&previous, next),
                    description: format!(
                        "Updated distance to node {} to {}",
                        graph.label(NodeId(next)),
                        alt
                    ),
                    ..TraceStep::default()
                });
            } else {
                rec.push(TraceStep {
                    graph: Some(graph.clone()),
                    current: vec![current],
                    comparing: vec![next],
                    visited: visited_now.clone(),
                    path: path.clone(),
                    description: format!(
                        "Kept existing distance to node {} as {}",
                        graph.label(NodeId(next)),
                        distances[next]
                    ),
                    ..TraceStep::default()
                });
            }
        }
    }

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), "dijkstra trace recorded");
    trace
}

/// A* search with an unordered open set and Euclidean heuristic.
///
/// The lowest f-score is found by linear scan (one comparison per scanned
/// element); closed-set membership checks charge one comparison each.
pub fn a_star(graph: &Graph) -> Trace {
    let mut rec = TraceRecorder::new();
    let n = graph.node_count();
    let start = 0;
    let end = n - 1;

    let adjacency = AdjacencyList::build(graph);
    let heuristic = |from: usize| graph.nodes[from].distance(&graph.nodes[end]);

    let mut open: Vec<usize> = vec![start];
    let mut closed: Vec<usize> = Vec::new();
    let mut g_score = vec![f64::INFINITY; n];
    g_score[start] = 0.0;
    let mut f_score = vec![f64::INFINITY; n];
    f_score[start] = heuristic(start);
    let mut previous: Vec<Option<usize>> = vec![None; n];
    let mut found = false;

    rec.push(TraceStep {
        graph: Some(graph.clone()),
        current: vec![start],
        description: format!(
            "Starting A* search from node {} to {}",
            graph.label(NodeId(start)),
            graph.label(NodeId(end))
        ),
        ..TraceStep::default()
    });

    while !open.is_empty() {
        let mut lowest = 0;
        for i in 1..open.len() {
            rec.count_comparisons(1);
            if f_score[open[i]] < f_score[open[lowest]] {
                lowest = i;
            }
        }
        let current = open[lowest];

        if current == end {
            let mut seen = closed.clone();
            seen.extend(open.iter().copied());
            rec.push(TraceStep {
                graph: Some(graph.clone()),
                current: vec![current],
                visited: seen,
                path: reconstruct_path(&previous, current),
                description: format!(
                    "Reached target node {} with total cost {}",
                    graph.label(NodeId(end)),
                    g_score[end]
                ),
                ..TraceStep::default()
            });
            found = true;
            break;
        }

        open.remove(lowest);
        closed.push(current);

        rec.push(TraceStep {
            graph: Some(graph.clone()),
            current: vec![current],
            visited: closed.clone(),
            path: reconstruct_path(&previous, current),
            description: format!(
                "Exploring node {} with f-score {}",
                graph.label(NodeId(current)),
                f_score[current]
            ),
            ..TraceStep::default()
        });

        for neighbor in adjacency.neighbors(NodeId(current)) {
            let next = neighbor.node.0;
            rec.count_accesses(1);

            if closed.contains(&next) {
                rec.count_comparisons(1);
                continue;
            }

            let tentative = g_score[current] + neighbor.weight as f64;
            let is_new = !open.contains(&next);
            if is_new {
                open.push(next);
            }

            rec.count_comparisons(1);
            if tentative < g_score[next] {
                previous[next] = Some(current);
                g_score[next] = tentative;
                f_score[next] = tentative + heuristic(next);

                rec.push(TraceStep {
                    graph: Some(graph.clone()),
                    current: vec![current],
                    comparing: vec![next],
                    visited: closed.clone(),
                    path: reconstruct_path(&previous, next),
                    description: format!(
                        "{} node {} with g-score={}, f-score={}",
                        if is_new { "Discovered" } else { "Updated" },
                        graph.label(NodeId(next)),
                        tentative,
                        f_score[next]
                    ),
                    ..TraceStep::default()
                });
            }
        }
    }

    if !found {
        rec.push(TraceStep {
            graph: Some(graph.clone()),
            visited: closed.clone(),
            description: format!(
                "No path found from node {} to {}",
                graph.label(NodeId(start)),
                graph.label(NodeId(end))
            ),
            ..TraceStep::default()
        });
    }

    let trace = rec.finish();
    tracing::debug!(steps = trace.len(), found, "a* trace recorded");
    trace
}

/// Indices of the set bits in a visited-flag array.
fn visited_ids(visited: &[bool]) -> Vec<usize> {
    visited
        .iter()
        .enumerate()
        .filter_map(|(i, &seen)| seen.then_some(i))
        .collect()
}

/// Follow predecessors from `current` back to the start, front-first.
fn reconstruct_path(previous: &[Option<usize>], current: usize) -> Vec<usize> {
    let mut path = vec![current];
    let mut node = current;
    while let Some(prev) = previous[node] {
        node = prev;
        path.insert(0, node);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_graph::{Edge, Node};

    /// Path A-B-C-D with unit weights plus a heavy direct edge A-D.
    ///
    /// Nodes sit one unit apart so the Euclidean heuristic never
    /// overestimates the unit edge weights.
    fn diamond() -> Graph {
        let nodes = vec![
            Node::new(NodeId(0), 0.0, 0.0),
            Node::new(NodeId(1), 1.0, 0.0),
            Node::new(NodeId(2), 2.0, 0.0),
            Node::new(NodeId(3), 3.0, 0.0),
        ];
        let edges = vec![
            Edge::new(NodeId(0), NodeId(1), 1),
            Edge::new(NodeId(1), NodeId(2), 1),
            Edge::new(NodeId(2), NodeId(3), 1),
            Edge::new(NodeId(0), NodeId(3), 9),
        ];
        Graph::new(nodes, edges)
    }

    #[test]
    fn dijkstra_finds_cheap_path() {
        let trace = dijkstra(&diamond());

        let last = trace.last().unwrap();
        assert_eq!(
            last.description,
            "Reached target node D with total distance 3"
        );
        assert_eq!(last.path, vec![0, 1, 2, 3]);
        assert!(trace.check_invariants().is_ok());
    }

    #[test]
    fn dijkstra_emits_kept_and_updated_steps() {
        let trace = dijkstra(&diamond());
        assert!(trace
            .iter()
            .any(|s| s.description.starts_with("Updated distance to node")));
        assert!(trace
            .iter()
            .any(|s| s.description.starts_with("Kept existing distance to node")));
    }

    #[test]
    fn dijkstra_reports_unreachable_remainder() {
        // Two components: target D unreachable from A.
        let nodes = (0..4).map(|i| Node::new(NodeId(i), i as f64, 0.0)).collect();
        let edges = vec![
            Edge::new(NodeId(0), NodeId(1), 1),
            Edge::new(NodeId(2), NodeId(3), 1),
        ];
        let graph = Graph::new(nodes, edges);

        let trace = dijkstra(&graph);
        assert_eq!(
            trace.last().unwrap().description,
            "No further nodes are reachable"
        );
        assert_eq!(trace.last().unwrap().visited, vec![0, 1]);
    }

    #[test]
    fn dijkstra_single_node() {
        let graph = Graph::new(vec![Node::new(NodeId(0), 0.0, 0.0)], Vec::new());
        let trace = dijkstra(&graph);
        assert_eq!(
            trace.last().unwrap().description,
            "Reached target node A with total distance 0"
        );
    }

    #[test]
    fn a_star_reaches_target_via_cheap_path() {
        let trace = a_star(&diamond());

        let last = trace.last().unwrap();
        assert_eq!(last.description, "Reached target node D with total cost 3");
        assert_eq!(last.path, vec![0, 1, 2, 3]);
        assert!(trace.check_invariants().is_ok());
    }

    #[test]
    fn a_star_reports_no_path() {
        let nodes = (0..3).map(|i| Node::new(NodeId(i), i as f64, 0.0)).collect();
        let graph = Graph::new(nodes, vec![Edge::new(NodeId(0), NodeId(1), 1)]);

        let trace = a_star(&graph);
        assert_eq!(
            trace.last().unwrap().description,
            "No path found from node A to C"
        );
    }

    #[test]
    fn a_star_discovers_then_updates() {
        let trace = a_star(&diamond());
        assert!(trace
            .iter()
            .any(|s| s.description.starts_with("Discovered node")));
        // The heavy shortcut seeds D's g-score; the cheap path improves it.
        assert!(trace
            .iter()
            .any(|s| s.description.starts_with("Updated node D")));
    }

    #[test]
    fn path_reconstruction() {
        let previous = vec![None, Some(0), Some(1), Some(2)];
        assert_eq!(reconstruct_path(&previous, 3), vec![0, 1, 2, 3]);
        assert_eq!(reconstruct_path(&previous, 0), vec![0]);
    }
}
