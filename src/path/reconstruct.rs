use super::Path;
use crate::{ClosedSet, Point, SearchError};

/// Walks the predecessor links in `closed` from `goal` back to the source.
///
/// The returned path starts at the source and ends at `goal`. Its cost is the goal's
/// accumulated cost.
///
/// ## Errors
/// [`SearchError::BrokenChain`] if `goal` or any predecessor on the way is not in `closed`,
/// or if the links loop without reaching a source. Neither can happen for a set returned by
/// a successful search.
pub fn reconstruct(closed: &ClosedSet, goal: Point) -> Result<Path, SearchError> {
    let mut current = closed
        .get(goal)
        .ok_or(SearchError::BrokenChain { missing: goal })?;
    let cost = current.cost;

    let mut steps = vec![current.pos];
    while let Some(prev) = current.predecessor {
        current = closed
            .get(prev)
            .ok_or(SearchError::BrokenChain { missing: prev })?;
        steps.push(current.pos);

        // every node appears once, so a longer walk must be a loop
        if steps.len() > closed.len() {
            return Err(SearchError::BrokenChain { missing: prev });
        }
    }
    steps.reverse();

    Ok(Path::new(steps, cost))
}
