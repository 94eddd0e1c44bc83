//! Algorithm families.

use std::fmt;

use serde::{Deserialize, Serialize};

use algoviz_input::Input;

use crate::error::{Error, Result};

/// The four algorithm families.
///
/// A closed variant: the family selects both the input generator behavior
/// and the presentation rendering path, and every dispatch point matches
/// exhaustively so adding a family is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
    Pathfinding,
    Graph,
}

impl Category {
    /// All families, in catalog order.
    pub const ALL: [Self; 4] = [
        Self::Sorting,
        Self::Searching,
        Self::Pathfinding,
        Self::Graph,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sorting => "sorting",
            Self::Searching => "searching",
            Self::Pathfinding => "pathfinding",
            Self::Graph => "graph",
        }
    }

    /// Check that `input` is the right variant for this family and meets
    /// the minimum-size precondition.
    pub fn check_input(&self, input: &Input) -> Result<()> {
        match (self, input) {
            (Self::Sorting, Input::Array(array)) => {
                if array.is_empty() {
                    return Err(Error::InvalidInput("array must not be empty".into()));
                }
            }
            (Self::Searching, Input::Search { array, .. }) => {
                if array.is_empty() {
                    return Err(Error::InvalidInput("array must not be empty".into()));
                }
            }
            (Self::Pathfinding, Input::Graph(graph)) | (Self::Graph, Input::Graph(graph)) => {
                if graph.is_empty() {
                    return Err(Error::InvalidInput("graph must have at least one node".into()));
                }
            }
            (category, _) => {
                return Err(Error::InvalidInput(format!(
                    "wrong input variant for a {} algorithm",
                    category
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_lowercase() {
        for category in Category::ALL {
            assert_eq!(category.name(), category.name().to_lowercase());
        }
    }

    #[test]
    fn sorting_rejects_empty_and_wrong_variant() {
        assert!(Category::Sorting.check_input(&Input::Array(vec![1])).is_ok());
        assert!(Category::Sorting.check_input(&Input::Array(vec![])).is_err());
        assert!(Category::Sorting
            .check_input(&Input::Search {
                array: vec![1],
                target: 1
            })
            .is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Pathfinding).unwrap();
        assert_eq!(json, "\"pathfinding\"");
    }
}
