use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::hash_map::Entry;

use super::SearchNode;
use crate::{Cost, Point, PointMap};

/// Heap entry. Ordered so that the `BinaryHeap` pops the lowest cost first, and among equal
/// costs the point that entered the frontier first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Element {
    cost: Cost,
    discovered: u64,
    pos: Point,
}

impl Ord for Element {
    fn cmp(&self, other: &Element) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.discovered.cmp(&self.discovered))
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Element) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    node: SearchNode,
    discovered: u64,
}

/// Discovered but not yet finalized nodes.
///
/// Holds at most one node per point. Superseded heap elements stay in the heap and are
/// skipped when popped.
#[derive(Clone, Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Element>,
    entries: PointMap<FrontierEntry>,
    next_discovery: u64,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            entries: PointMap::with_capacity(capacity),
            next_discovery: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds `pos` at `cost`, or lowers its cost if it is already present and `cost` is cheaper.
    ///
    /// A lowered point keeps its original discovery order. Returns `true` if the frontier changed.
    pub fn relax(&mut self, pos: Point, cost: Cost, predecessor: Option<Point>) -> bool {
        let node = SearchNode::new(pos, cost, predecessor);
        let discovered = match self.entries.entry(pos) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if cost >= entry.node.cost {
                    return false;
                }
                entry.node = node;
                entry.discovered
            }
            Entry::Vacant(vacant) => {
                let discovered = self.next_discovery;
                self.next_discovery += 1;
                vacant.insert(FrontierEntry { node, discovered });
                discovered
            }
        };
        self.heap.push(Element {
            cost,
            discovered,
            pos,
        });
        true
    }

    /// Removes and returns the cheapest node.
    pub fn pop_min(&mut self) -> Option<SearchNode> {
        while let Some(Element { cost, pos, .. }) = self.heap.pop() {
            let current = match self.entries.get(&pos) {
                Some(entry) => entry.node.cost,
                // already closed
                None => continue,
            };
            match cost.cmp(&current) {
                Ordering::Greater => continue,
                Ordering::Equal => {}
                Ordering::Less => unreachable!("frontier cost increased for {:?}", pos),
            }
            return self.entries.remove(&pos).map(|entry| entry.node);
        }
        None
    }

    pub fn get(&self, pos: Point) -> Option<&SearchNode> {
        self.entries.get(&pos).map(|entry| &entry.node)
    }

    /// Every node, in the order its point was first discovered.
    pub fn snapshot(&self) -> Vec<SearchNode> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_unstable_by_key(|entry| entry.discovered);
        entries.into_iter().map(|entry| entry.node).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_cheapest_first() {
        let mut frontier = Frontier::default();
        frontier.relax((0, 0), 5, None);
        frontier.relax((0, 1), 2, None);
        frontier.relax((0, 2), 9, None);

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop_min())
            .map(|node| node.pos)
            .collect();
        assert_eq!(order, [(0, 1), (0, 0), (0, 2)]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_go_to_first_discovered() {
        let mut frontier = Frontier::default();
        frontier.relax((2, 2), 3, None);
        frontier.relax((0, 0), 3, None);
        frontier.relax((1, 1), 3, None);

        assert_eq!(frontier.pop_min().unwrap().pos, (2, 2));
        assert_eq!(frontier.pop_min().unwrap().pos, (0, 0));
        assert_eq!(frontier.pop_min().unwrap().pos, (1, 1));
    }

    #[test]
    fn keeps_only_the_cheaper_entry() {
        let mut frontier = Frontier::default();
        assert!(frontier.relax((1, 1), 10, Some((0, 0))));
        assert!(!frontier.relax((1, 1), 10, Some((0, 1))));
        assert!(!frontier.relax((1, 1), 12, Some((0, 2))));
        assert!(frontier.relax((1, 1), 4, Some((1, 0))));

        assert_eq!(frontier.len(), 1);
        assert_eq!(
            frontier.get((1, 1)),
            Some(&SearchNode::new((1, 1), 4, Some((1, 0))))
        );

        // the superseded heap element is skipped
        assert_eq!(frontier.pop_min().unwrap().cost, 4);
        assert_eq!(frontier.pop_min(), None);
    }

    #[test]
    fn lowered_entry_keeps_discovery_order() {
        let mut frontier = Frontier::default();
        frontier.relax((0, 0), 8, None);
        frontier.relax((5, 5), 3, None);
        frontier.relax((0, 0), 3, None);

        assert_eq!(frontier.pop_min().unwrap().pos, (0, 0));
        assert_eq!(frontier.pop_min().unwrap().pos, (5, 5));
    }

    #[test]
    fn snapshot_in_discovery_order() {
        let mut frontier = Frontier::with_capacity(4);
        frontier.relax((3, 0), 1, None);
        frontier.relax((1, 0), 9, None);
        frontier.relax((2, 0), 5, None);
        frontier.relax((1, 0), 2, None);

        let points: Vec<_> = frontier.snapshot().iter().map(|node| node.pos).collect();
        assert_eq!(points, [(3, 0), (1, 0), (2, 0)]);
    }
}
