use super::SearchNode;
use crate::{Cost, Point, PointMap};

/// Finalized nodes, in the order they were closed.
///
/// Each point appears at most once, and its cost is the cheapest way to reach it from the
/// source. When a `ClosedSet` is collected from an iterator, the first node for a point
/// wins and later ones are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClosedSet {
    nodes: Vec<SearchNode>,
    index: PointMap<usize>,
}

impl ClosedSet {
    pub(crate) fn with_capacity(capacity: usize) -> ClosedSet {
        ClosedSet {
            nodes: Vec::with_capacity(capacity),
            index: PointMap::with_capacity(capacity),
        }
    }

    /// Closes `node`. Returns `false` and leaves the set unchanged if its point is already
    /// closed.
    pub(crate) fn insert(&mut self, node: SearchNode) -> bool {
        if self.index.contains_key(&node.pos) {
            return false;
        }
        self.index.insert(node.pos, self.nodes.len());
        self.nodes.push(node);
        true
    }

    /// The finalized node at `pos`.
    pub fn get(&self, pos: Point) -> Option<&SearchNode> {
        self.index.get(&pos).map(|&i| &self.nodes[i])
    }

    /// `true` if `pos` has been finalized.
    pub fn contains(&self, pos: Point) -> bool {
        self.index.contains_key(&pos)
    }

    /// The cheapest cost from the source to `pos`, if `pos` was finalized.
    pub fn cost_of(&self, pos: Point) -> Option<Cost> {
        self.get(pos).map(|node| node.cost)
    }

    /// The most recently closed node. After a successful search this is the goal.
    pub fn last(&self) -> Option<&SearchNode> {
        self.nodes.last()
    }

    /// Number of finalized nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if nothing has been closed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes in closing order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode> {
        self.nodes.iter()
    }

    pub(crate) fn as_slice(&self) -> &[SearchNode] {
        &self.nodes
    }
}

impl FromIterator<SearchNode> for ClosedSet {
    fn from_iter<I: IntoIterator<Item = SearchNode>>(iter: I) -> ClosedSet {
        let mut closed = ClosedSet::default();
        for node in iter {
            closed.insert(node);
        }
        closed
    }
}

impl<'a> IntoIterator for &'a ClosedSet {
    type Item = &'a SearchNode;
    type IntoIter = std::slice::Iter<'a, SearchNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
