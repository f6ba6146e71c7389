#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{find_path_with, Grid, PathResult, Point, SearchConfig, SearchError};

/// Answers many `(start, goal)` queries on the same grid.
///
/// Each query is an independent search with its own state, and the results come back in
/// query order. With the `parallel` feature the queries are spread over `rayon`'s thread
/// pool. Every single search still runs on one thread.
///
/// ## Examples
/// ```
/// use uniform_cost::prelude::*;
///
/// let grid: Grid = "1 1\nZ 1".parse().unwrap();
/// let results = search_batch(&grid, &[((0, 0), (1, 1)), ((0, 0), (1, 0))], SearchConfig::default());
///
/// assert_eq!(results[0].as_ref().unwrap().cost(), Some(1));
/// assert!(results[1].is_err());
/// ```
pub fn search_batch(
    grid: &Grid,
    queries: &[(Point, Point)],
    config: SearchConfig,
) -> Vec<Result<PathResult, SearchError>> {
    #[cfg(feature = "parallel")]
    let iter = queries.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = queries.iter();

    iter.map(|&(start, goal)| find_path_with(grid, start, goal, config))
        .collect()
}
