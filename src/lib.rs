//! Minimum-cost paths on weighted grids.
//!
//! A [`Grid`] is a rectangle of cells, each either a positive traversal cost or a wall. Moving
//! is allowed to any of the 8 surrounding cells, and entering a cell pays its cost. The start
//! cell is free: on a 3x3 grid of ones, the diagonal from `(0, 0)` to `(2, 2)` enters two cells
//! and costs 2, not 3. [`find_path`] runs a uniform-cost (Dijkstra) search and returns the cheapest
//! [`Path`] between two cells.
//!
//! ## Examples
//! ```
//! use uniform_cost::prelude::*;
//!
//! // 'Z' marks a wall
//! let grid: Grid = "
//!     1 1 1
//!     1 Z 1
//!     1 1 1
//! "
//! .parse()
//! .unwrap();
//!
//! match find_path(&grid, (0, 0), (2, 2)).unwrap() {
//!     PathResult::Found(path) => {
//!         assert_eq!(path.cost(), 3);
//!         assert_eq!(path.start(), (0, 0));
//!         assert_eq!(path.goal(), (2, 2));
//!     }
//!     PathResult::NotFound => unreachable!(),
//! }
//! ```
//!
//! The pieces can also be driven one at a time: a [`SearchEngine`] produces the
//! [`ClosedSet`] of finalized nodes, and [`reconstruct`] walks it back into a path.
//!
//! ```
//! use uniform_cost::prelude::*;
//!
//! let grid: Grid = "1 2\n3 4".parse().unwrap();
//! let engine = SearchEngine::new(&grid, SearchConfig::default());
//!
//! if let SearchOutcome::Found(closed) = engine.run((0, 0), (1, 1)).unwrap() {
//!     let path = reconstruct(&closed, (1, 1)).unwrap();
//!     assert_eq!(path.steps(), &[(0, 0), (1, 1)]);
//!     assert_eq!(path.cost(), 4);
//! }
//! ```
//!
//! ## Cargo features
//! - `parallel` (default): [`search_batch`] spreads independent queries over `rayon`.
//! - `log`: the engine reports through the `log` facade, and [`LogObserver`] becomes available.
//! - `serde`: configuration and result types derive `Serialize`/`Deserialize`.

mod batch;
mod config;
mod error;
mod grid;
pub mod neighbors;
mod path;
mod search;

pub use batch::search_batch;
pub use config::{Axes, GridConfig, SearchConfig};
pub use error::{Endpoint, EndpointReason, ParseError, SearchError, TokenErrorKind};
pub use grid::{Cell, Grid, GridDisplay};
pub use path::{reconstruct, Cost, Path};
#[cfg(feature = "log")]
pub use search::LogObserver;
pub use search::{
    ClosedSet, SearchEngine, SearchNode, SearchObserver, SearchOutcome, Snapshot, Step,
    TraceRecorder,
};

/// A grid position as `(row, column)`, both zero-based.
pub type Point = (usize, usize);

type PointMap<V> = hashbrown::HashMap<Point, V>;

/// The terminal result of a path query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// The cheapest path from start to goal.
    Found(Path),
    /// Walls separate the start from the goal.
    NotFound,
}

impl PathResult {
    /// The found path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    /// The total cost of the found path, if any.
    pub fn cost(&self) -> Option<Cost> {
        self.path().map(Path::cost)
    }

    /// Consumes the result, returning the path if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }
}

/// Finds the cheapest path from `start` to `goal` with the default [`SearchConfig`].
///
/// Both points are `(row, column)`. Callers using `(x, y)` should convert with
/// [`Axes::to_canonical`] first.
///
/// ## Errors
/// [`SearchError::InvalidEndpoint`] if either endpoint is out of bounds or a wall.
pub fn find_path(grid: &Grid, start: Point, goal: Point) -> Result<PathResult, SearchError> {
    find_path_with(grid, start, goal, SearchConfig::default())
}

/// Like [`find_path`], with an explicit [`SearchConfig`].
pub fn find_path_with(
    grid: &Grid,
    start: Point,
    goal: Point,
    config: SearchConfig,
) -> Result<PathResult, SearchError> {
    match SearchEngine::new(grid, config).run(start, goal)? {
        SearchOutcome::Found(closed) => reconstruct(&closed, goal).map(PathResult::Found),
        SearchOutcome::NotFound => Ok(PathResult::NotFound),
    }
}

/// Everything needed for everyday use.
pub mod prelude {
    pub use crate::{
        find_path, find_path_with, reconstruct, search_batch, Axes, Cell, ClosedSet, Cost, Grid,
        GridConfig, ParseError, Path, PathResult, Point, SearchConfig, SearchEngine, SearchError,
        SearchOutcome,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn start_cell_is_free() {
        let grid: Grid = "1 1 1\n1 1 1\n1 1 1".parse().unwrap();
        let path = find_path(&grid, (0, 0), (2, 2)).unwrap().into_path().unwrap();
        assert_eq!(path.steps(), &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(path.cost(), 2);

        // a costly start changes nothing
        let grid: Grid = "9 1\n1 1".parse().unwrap();
        assert_eq!(find_path(&grid, (0, 0), (1, 1)).unwrap().cost(), Some(1));
    }

    #[test]
    fn start_equals_goal() {
        let grid: Grid = "5 5\n5 5".parse().unwrap();
        let path = find_path(&grid, (1, 0), (1, 0)).unwrap().into_path().unwrap();
        assert_eq!(path.steps(), &[(1, 0)]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn walled_off_goal() {
        let grid: Grid = "
            1 1 Z 1
            1 1 Z 1
            Z Z Z 1
        "
        .parse()
        .unwrap();
        assert_eq!(find_path(&grid, (0, 0), (0, 3)), Ok(PathResult::NotFound));
    }

    #[test]
    fn wall_endpoint_is_rejected() {
        let grid: Grid = "Z 1\n1 1".parse().unwrap();
        let err = find_path(&grid, (0, 0), (1, 1)).unwrap_err();
        assert_eq!(err.code(), "INVALID_ENDPOINT");
    }

    #[test]
    fn result_accessors() {
        let grid: Grid = "1 2".parse().unwrap();
        let result = find_path(&grid, (0, 0), (0, 1)).unwrap();
        assert_eq!(result.cost(), Some(2));
        assert_eq!(result.path().map(Path::len), Some(2));
        assert_eq!(PathResult::NotFound.cost(), None);
    }
}
