//! Trace step snapshots and cumulative statistics.

use algoviz_graph::Graph;
use serde::{Deserialize, Serialize};

/// Cumulative operation counters from trace start to a step.
///
/// Counters never decrease across the steps of one trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Comparisons of two data values.
    pub comparisons: u64,
    /// Element placements/exchanges, one per exchange.
    pub swaps: u64,
    /// Discrete reads and writes of the working array or graph.
    pub array_accesses: u64,
}

impl Stats {
    /// True if no counter of `self` is below the matching counter of `earlier`.
    pub fn dominates(&self, earlier: &Stats) -> bool {
        self.comparisons >= earlier.comparisons
            && self.swaps >= earlier.swaps
            && self.array_accesses >= earlier.array_accesses
    }
}

/// One immutable snapshot of algorithm state.
///
/// Array and graph snapshots are independent copies; later mutation of the
/// working data cannot corrupt recorded history. Highlight sets are
/// semantically sets of indices/node-ids but stored as ordered sequences;
/// an empty sequence means the role is absent for this step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Full array snapshot (sorting/searching).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array: Option<Vec<i64>>,

    /// Full graph snapshot (pathfinding/graph).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<Graph>,

    /// Positions the algorithm is focused on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current: Vec<usize>,

    /// Positions being compared.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparing: Vec<usize>,

    /// Positions being exchanged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub swapping: Vec<usize>,

    /// Positions in their final sorted place.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorted: Vec<usize>,

    /// Positions/nodes already visited.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visited: Vec<usize>,

    /// Node chain of the currently reconstructed path.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<usize>,

    /// Counters cumulative from trace start to this step.
    pub stats: Stats,

    /// Human-readable narration of this step; never empty in a finished trace.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_domination() {
        let a = Stats {
            comparisons: 3,
            swaps: 1,
            array_accesses: 7,
        };
        let b = Stats {
            comparisons: 3,
            swaps: 2,
            array_accesses: 7,
        };
        assert!(b.dominates(&a));
        assert!(!a.dominates(&b));
        assert!(a.dominates(&a));
    }

    #[test]
    fn empty_highlights_skipped_in_json() {
        let step = TraceStep {
            array: Some(vec![1]),
            description: "Starting".into(),
            ..TraceStep::default()
        };
        let json = serde_json::to_string(&step).unwrap();
        assert!(!json.contains("comparing"));
        assert!(!json.contains("graph"));
        assert!(json.contains("stats"));
    }
}
