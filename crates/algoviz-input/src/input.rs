//! Input variants and array shape selection.

use std::fmt;
use std::str::FromStr;

use algoviz_graph::Graph;

use crate::error::Error;

/// Shape of a generated array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrayShape {
    /// Uniform permutation of 1..=size.
    #[default]
    Random,
    /// Sorted sequence with ⌈0.1·size⌉ random pairwise swaps.
    NearlySorted,
    /// Strictly descending size..=1.
    Reversed,
    /// Each element drawn uniformly from 1..=5.
    FewUnique,
}

impl ArrayShape {
    /// All shapes, for selection UIs.
    pub const ALL: [Self; 4] = [
        Self::Random,
        Self::NearlySorted,
        Self::Reversed,
        Self::FewUnique,
    ];

    /// Canonical name, matching [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::NearlySorted => "nearly-sorted",
            Self::Reversed => "reversed",
            Self::FewUnique => "few-unique",
        }
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArrayShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "nearly-sorted" => Ok(Self::NearlySorted),
            "reversed" => Ok(Self::Reversed),
            "few-unique" => Ok(Self::FewUnique),
            other => Err(Error::UnknownShape(other.to_string())),
        }
    }
}

/// One generated algorithm input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Plain array (sorting).
    Array(Vec<i64>),
    /// Sorted array plus a target value present in it (searching).
    Search { array: Vec<i64>, target: i64 },
    /// Connected weighted graph (pathfinding/graph traversal).
    Graph(Graph),
}

impl Input {
    /// Number of elements or nodes.
    pub fn size(&self) -> usize {
        match self {
            Input::Array(array) => array.len(),
            Input::Search { array, .. } => array.len(),
            Input::Graph(graph) => graph.node_count(),
        }
    }
}
