use super::frontier::Frontier;
use super::observer::{SearchObserver, Step};
use super::ClosedSet;
use crate::{Endpoint, EndpointReason, Grid, Point, SearchConfig, SearchError};

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was closed. The set's predecessor links lead from the goal back to the start.
    Found(ClosedSet),
    /// The frontier ran out before the goal was reached.
    NotFound,
}

impl SearchOutcome {
    /// `true` for [`SearchOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Uniform-cost search from one start to one goal.
///
/// Every step expands the cheapest frontier node. Among equally cheap nodes, the one whose
/// point was discovered first is expanded first, and lowering a point's cost does not change
/// its place in that order. Ties therefore decide which of several equally cheap paths is
/// found, but never the cost.
///
/// An engine is consumed by [`run`](SearchEngine::run), so every search starts from empty
/// state.
#[derive(Clone, Debug)]
pub struct SearchEngine<'a> {
    grid: &'a Grid,
    config: SearchConfig,
    frontier: Frontier,
    closed: ClosedSet,
}

impl<'a> SearchEngine<'a> {
    /// Prepares a search over `grid`.
    pub fn new(grid: &'a Grid, config: SearchConfig) -> SearchEngine<'a> {
        let size_hint = if config.size_hint == 0 {
            grid.len()
        } else {
            config.size_hint
        };
        SearchEngine {
            grid,
            config,
            frontier: Frontier::with_capacity(size_hint / 2),
            closed: ClosedSet::with_capacity(size_hint),
        }
    }

    /// Searches for the cheapest way from `start` to `goal`.
    ///
    /// The start costs nothing. Every other cell on the path adds its cost.
    ///
    /// ## Errors
    /// - [`SearchError::InvalidEndpoint`] if `start` or `goal` is out of bounds or a wall.
    /// - [`SearchError::ExpansionLimit`] if [`SearchConfig::max_expansions`] is reached first.
    /// - [`SearchError::CostOverflow`] if the cost of reaching some cell exceeds `usize::MAX`.
    pub fn run(self, start: Point, goal: Point) -> Result<SearchOutcome, SearchError> {
        self.run_observed(start, goal, &mut ())
    }

    /// Like [`run`](SearchEngine::run), reporting every expansion to `observer`.
    pub fn run_observed<O: SearchObserver + ?Sized>(
        mut self,
        start: Point,
        goal: Point,
        observer: &mut O,
    ) -> Result<SearchOutcome, SearchError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::Goal, goal)?;

        self.frontier.relax(start, 0, None);

        let mut all_neighbors = Vec::with_capacity(8);
        let mut iteration = 0;

        while let Some(current) = self.frontier.pop_min() {
            if current.pos == goal {
                self.closed.insert(current);
                search_log!(
                    debug,
                    "found {:?} -> {:?} at cost {} after {} expansions ({} open)",
                    start,
                    goal,
                    current.cost,
                    iteration,
                    self.frontier.len()
                );
                observer.on_goal(&self.closed);
                return Ok(SearchOutcome::Found(self.closed));
            }

            if let Some(limit) = self.config.max_expansions {
                if iteration >= limit {
                    search_log!(
                        debug,
                        "gave up on {:?} -> {:?} after {} expansions",
                        start,
                        goal,
                        limit
                    );
                    return Err(SearchError::ExpansionLimit { limit });
                }
            }

            self.closed.insert(current);

            all_neighbors.clear();
            self.grid.get_all_neighbors(current.pos, &mut all_neighbors);

            for &other in all_neighbors.iter() {
                let enter_cost = match self.grid.cost_at(other) {
                    Some(cost) => cost,
                    // wall
                    None => continue,
                };
                if self.closed.contains(other) {
                    continue;
                }
                let cost = current
                    .cost
                    .checked_add(enter_cost)
                    .ok_or(SearchError::CostOverflow { at: other })?;
                self.frontier.relax(other, cost, Some(current.pos));
            }

            search_log!(
                trace,
                "expanded {} ({} open, {} closed)",
                current,
                self.frontier.len(),
                self.closed.len()
            );

            observer.on_expand(&Step {
                iteration,
                expanded: current,
                frontier: &self.frontier,
                closed: &self.closed,
            });
            iteration += 1;
        }

        search_log!(
            debug,
            "no path {:?} -> {:?}, {} cells reachable",
            start,
            goal,
            self.closed.len()
        );
        Ok(SearchOutcome::NotFound)
    }

    fn check_endpoint(&self, endpoint: Endpoint, point: Point) -> Result<(), SearchError> {
        let reason = if !self.grid.in_bounds(point) {
            EndpointReason::OutOfBounds
        } else if self.grid.is_wall(point) {
            EndpointReason::Wall
        } else {
            return Ok(());
        };
        Err(SearchError::InvalidEndpoint {
            endpoint,
            point,
            reason,
        })
    }
}
