use super::frontier::Frontier;
use super::{ClosedSet, SearchNode};
use crate::Point;

/// Receives the state of a search after every expansion.
///
/// Attach one with [`SearchEngine::run_observed`](crate::SearchEngine::run_observed). `()`
/// ignores everything.
pub trait SearchObserver {
    /// Called once per expansion, after the expanded node's neighbors were relaxed.
    fn on_expand(&mut self, step: &Step<'_>);

    /// Called when the goal is selected and closed, ending the search.
    fn on_goal(&mut self, _closed: &ClosedSet) {}
}

impl SearchObserver for () {
    fn on_expand(&mut self, _step: &Step<'_>) {}
}

/// A view of the search state right after one expansion.
#[derive(Clone, Copy, Debug)]
pub struct Step<'s> {
    pub(super) iteration: usize,
    pub(super) expanded: SearchNode,
    pub(super) frontier: &'s Frontier,
    pub(super) closed: &'s ClosedSet,
}

impl<'s> Step<'s> {
    /// Zero-based expansion number.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The node that was just expanded and closed.
    pub fn expanded(&self) -> &SearchNode {
        &self.expanded
    }

    /// Number of nodes waiting in the frontier.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// The frontier node at `pos`, if any.
    pub fn frontier_node(&self, pos: Point) -> Option<&'s SearchNode> {
        self.frontier.get(pos)
    }

    /// Every frontier node, in the order its point was first discovered.
    pub fn frontier(&self) -> Vec<SearchNode> {
        self.frontier.snapshot()
    }

    /// Every closed node, in closing order.
    pub fn closed(&self) -> &'s [SearchNode] {
        self.closed.as_slice()
    }

    /// Copies this step into an owned [`Snapshot`].
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            iteration: self.iteration,
            expanded: self.expanded,
            frontier: self.frontier(),
            closed: self.closed().to_vec(),
        }
    }
}

/// An owned copy of a [`Step`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Zero-based expansion number.
    pub iteration: usize,
    /// The node that was expanded.
    pub expanded: SearchNode,
    /// Frontier nodes in discovery order.
    pub frontier: Vec<SearchNode>,
    /// Closed nodes in closing order.
    pub closed: Vec<SearchNode>,
}

/// Records a [`Snapshot`] of every expansion.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    snapshots: Vec<Snapshot>,
    reached_goal: bool,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> TraceRecorder {
        TraceRecorder::default()
    }

    /// The recorded snapshots, one per expansion.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// `true` if the recorded search ended by closing its goal.
    pub fn reached_goal(&self) -> bool {
        self.reached_goal
    }

    /// Consumes the recorder, returning its snapshots.
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl SearchObserver for TraceRecorder {
    fn on_expand(&mut self, step: &Step<'_>) {
        self.snapshots.push(step.to_snapshot());
    }

    fn on_goal(&mut self, _closed: &ClosedSet) {
        self.reached_goal = true;
    }
}

/// Writes every expansion to the `log` facade.
///
/// The frontier and closed lists are only formatted when `level` is enabled.
#[cfg(feature = "log")]
#[derive(Clone, Copy, Debug)]
pub struct LogObserver {
    level: log::Level,
}

#[cfg(feature = "log")]
impl Default for LogObserver {
    fn default() -> Self {
        LogObserver {
            level: log::Level::Trace,
        }
    }
}

#[cfg(feature = "log")]
impl LogObserver {
    /// Logs at `level` instead of `Trace`.
    pub fn with_level(level: log::Level) -> LogObserver {
        LogObserver { level }
    }
}

#[cfg(feature = "log")]
impl SearchObserver for LogObserver {
    fn on_expand(&mut self, step: &Step<'_>) {
        if !log::log_enabled!(self.level) {
            return;
        }
        log::log!(
            self.level,
            "iteration {}: expanded {}",
            step.iteration(),
            step.expanded()
        );
        for node in step.frontier() {
            log::log!(self.level, "  open   {}", node);
        }
        for node in step.closed() {
            log::log!(self.level, "  closed {}", node);
        }
    }

    fn on_goal(&mut self, closed: &ClosedSet) {
        if let Some(goal) = closed.last() {
            log::log!(self.level, "goal closed: {}", goal);
        }
    }
}
