//! Step-by-step progress reporting.
//!
//! A search calls its [`StepObserver`] every time it visits (expands) a
//! node, and, when [`SearchConfig::report_frontier`](crate::SearchConfig)
//! is set, every time it puts a position on its frontier. The start and
//! target positions are never reported; front ends draw those themselves.
//!
//! Any `FnMut(Step)` closure is an observer, so the simplest caller just
//! passes `&mut |step| ...`.

use gridsearch_core::Pos;

/// What happened to the reported position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// The position was taken off the frontier and expanded.
    Visited,
    /// The position was added to the frontier.
    Frontier,
}

/// One progress event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub pos: Pos,
    pub kind: StepKind,
    /// 1-based visit number for [`StepKind::Visited`], 0 for frontier
    /// events. Numbering restarts with every iterative-deepening pass.
    pub order: usize,
}

/// Receiver of search progress.
pub trait StepObserver {
    /// Called for every reported step.
    fn on_step(&mut self, step: Step);

    /// Called by iterative deepening before each pass, with the depth limit
    /// of that pass. Anything drawn for the previous pass is stale.
    fn on_restart(&mut self, depth: usize) {
        let _ = depth;
    }
}

impl<F: FnMut(Step)> StepObserver for F {
    #[inline]
    fn on_step(&mut self, step: Step) {
        self(step)
    }
}

/// An observer that ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _step: Step) {}
}

/// An observer that records what it is told.
///
/// `steps` holds the events of the current pass only: a restart clears it
/// and appends the new depth to `restarts`.
#[derive(Clone, Debug, Default)]
pub struct StepLog {
    pub steps: Vec<Step>,
    pub restarts: Vec<usize>,
}

impl StepLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited positions, in visit order.
    pub fn visited(&self) -> impl Iterator<Item = Pos> + '_ {
        self.of_kind(StepKind::Visited)
    }

    /// Frontier positions, in insertion order.
    pub fn frontier(&self) -> impl Iterator<Item = Pos> + '_ {
        self.of_kind(StepKind::Frontier)
    }

    fn of_kind(&self, kind: StepKind) -> impl Iterator<Item = Pos> + '_ {
        self.steps
            .iter()
            .filter(move |s| s.kind == kind)
            .map(|s| s.pos)
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.restarts.clear();
    }
}

impl StepObserver for StepLog {
    fn on_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    fn on_restart(&mut self, depth: usize) {
        self.steps.clear();
        self.restarts.push(depth);
    }
}
