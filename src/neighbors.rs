//! Which cells count as adjacent.
//!
//! The search only ever asks a [`Neighborhood`] for the in-bounds cells around a point. Walls
//! are the caller's concern.

use crate::Point;

/// Defines how a grid of a given size is connected.
pub trait Neighborhood: Clone + std::fmt::Debug {
    /// Appends every in-bounds neighbor of `point` to `target`.
    ///
    /// `target` is not cleared first.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
}

/// 8-connected neighborhood: orthogonal and diagonal moves.
///
/// Neighbors are produced row by row, top-left first:
/// ```text
/// 0 1 2
/// 3 . 4
/// 5 6 7
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
    rows: usize,
    columns: usize,
}

impl MooreNeighborhood {
    /// Creates a new MooreNeighborhood for a grid of `rows` x `columns` cells.
    pub fn new(rows: usize, columns: usize) -> MooreNeighborhood {
        MooreNeighborhood { rows, columns }
    }
}

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        let (row, column) = point;
        if row >= self.rows || column >= self.columns {
            return;
        }

        let row_range = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        for r in row_range {
            let column_range = column.saturating_sub(1)..=(column + 1).min(self.columns - 1);
            for c in column_range {
                if (r, c) != point {
                    target.push((r, c));
                }
            }
        }
    }
}
