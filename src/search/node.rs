use std::fmt;

use crate::{Cost, Point};

/// A cell reached by the search, with the cheapest known way to get there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    /// The cell.
    pub pos: Point,
    /// Sum of the costs of every cell entered on the way here from the source.
    pub cost: Cost,
    /// The cell this one was entered from. `None` only for the source.
    pub predecessor: Option<Point>,
}

impl SearchNode {
    /// Creates a node at `pos` reached for `cost`.
    pub fn new(pos: Point, cost: Cost, predecessor: Option<Point>) -> SearchNode {
        SearchNode {
            pos,
            cost,
            predecessor,
        }
    }

    /// `true` if this node has no predecessor.
    pub fn is_source(&self) -> bool {
        self.predecessor.is_none()
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.predecessor {
            Some(prev) => write!(f, "{:?} cost {} from {:?}", self.pos, self.cost, prev),
            None => write!(f, "{:?} cost {} (source)", self.pos, self.cost),
        }
    }
}

#[test]
fn display() {
    assert_eq!(
        SearchNode::new((1, 2), 7, Some((0, 1))).to_string(),
        "(1, 2) cost 7 from (0, 1)"
    );
    assert_eq!(
        SearchNode::new((0, 0), 0, None).to_string(),
        "(0, 0) cost 0 (source)"
    );
}
