use std::fmt;
use std::ops::Index;

use crate::Point;

mod reconstruct;
pub use reconstruct::reconstruct;

/// The unit of cell and path costs.
pub type Cost = usize;

/// A sequence of adjacent cells from a start to a goal, with its total cost.
///
/// The cost is the sum of the costs of every cell after the first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Point>,
    cost: Cost,
}

impl Path {
    pub(crate) fn new(steps: Vec<Point>, cost: Cost) -> Path {
        debug_assert!(!steps.is_empty(), "a path has at least its start");
        Path { steps, cost }
    }

    /// The total cost of walking the path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of cells, start and goal included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`: a path contains at least its start.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first cell.
    pub fn start(&self) -> Point {
        self.steps[0]
    }

    /// The last cell.
    pub fn goal(&self) -> Point {
        self.steps[self.steps.len() - 1]
    }

    /// Every cell, start first.
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }

    /// Iterates over the cells, start first.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }

    /// Consumes the path, returning its cells.
    pub fn into_steps(self) -> Vec<Point> {
        self.steps
    }
}

impl Index<usize> for Path {
    type Output = Point;
    #[track_caller]
    fn index(&self, index: usize) -> &Point {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{:?}", step)?;
        }
        write!(f, " (cost {})", self.cost)
    }
}

#[test]
fn accessors() {
    let path = Path::new(vec![(0, 0), (1, 1), (2, 1)], 7);
    assert_eq!(path.len(), 3);
    assert!(!path.is_empty());
    assert_eq!(path.start(), (0, 0));
    assert_eq!(path.goal(), (2, 1));
    assert_eq!(path[1], (1, 1));
    assert_eq!(path.iter().count(), 3);
    assert_eq!(path.to_string(), "(0, 0) -> (1, 1) -> (2, 1) (cost 7)");
    assert_eq!(path.into_steps(), vec![(0, 0), (1, 1), (2, 1)]);
}
