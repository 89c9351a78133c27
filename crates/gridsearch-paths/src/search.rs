//! Request validation, dispatch and the per-run search state.

use gridsearch_core::{CancelToken, Grid, Pos, Scene};

use crate::config::SearchConfig;
use crate::error::{Endpoint, SearchError, SearchResult};
use crate::node::{NodeArena, NodeId};
use crate::observer::{Step, StepKind, StepObserver};
use crate::outcome::SearchOutcome;
use crate::path;
use crate::strategy::Strategy;

/// Everything a search needs besides its observer and cancel token.
#[derive(Clone, Debug)]
pub struct SearchRequest<'g> {
    pub grid: &'g Grid,
    pub start: Option<Pos>,
    pub target: Option<Pos>,
    pub strategy: Strategy,
    pub config: SearchConfig,
}

impl<'g> SearchRequest<'g> {
    /// A request between two placed endpoints, with the default config.
    pub fn new(grid: &'g Grid, start: Pos, target: Pos, strategy: Strategy) -> Self {
        Self {
            grid,
            start: Some(start),
            target: Some(target),
            strategy,
            config: SearchConfig::default(),
        }
    }

    /// A request over a scene's grid and endpoints, which may be unset.
    pub fn from_scene(scene: &'g Scene, strategy: Strategy) -> Self {
        Self {
            grid: scene.grid(),
            start: scene.start(),
            target: scene.target(),
            strategy,
            config: SearchConfig::default(),
        }
    }

    /// Replace the config (builder).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Check the endpoints and return them as `(start, target)`.
    pub fn validate(&self) -> SearchResult<(Pos, Pos)> {
        let start = self.start.ok_or(SearchError::MissingStart)?;
        let target = self.target.ok_or(SearchError::MissingTarget)?;
        if start == target {
            return Err(SearchError::SameEndpoints(start));
        }
        for (which, pos) in [(Endpoint::Start, start), (Endpoint::Target, target)] {
            if !self.grid.contains(pos) {
                return Err(SearchError::OutOfBounds { which, pos });
            }
            if !self.grid.is_passable(pos) {
                return Err(SearchError::Blocked { which, pos });
            }
        }
        Ok((start, target))
    }

    /// Run the request. See [`search`].
    pub fn run<O: StepObserver + ?Sized>(
        &self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> SearchResult<SearchOutcome> {
        search(self, observer, cancel)
    }
}

/// Validate `request` and run its strategy to completion or cancellation.
///
/// The call is synchronous; `observer` is invoked as nodes are visited and
/// `cancel` is polled between steps. Errors are only returned for invalid
/// requests, before any search state exists.
pub fn search<O: StepObserver + ?Sized>(
    request: &SearchRequest<'_>,
    observer: &mut O,
    cancel: &CancelToken,
) -> SearchResult<SearchOutcome> {
    let (start, target) = request.validate()?;
    let grid = request.grid;
    log::debug!(
        "{}: searching {start} -> {target} on a {}x{} grid",
        request.strategy,
        grid.rows(),
        grid.cols()
    );

    let mut s = Searcher {
        grid,
        start,
        target,
        config: &request.config,
        cancel,
        observer,
        arena: NodeArena::new(),
        visits: 0,
        total_visits: 0,
        nbuf: Vec::with_capacity(6),
    };

    let mut depth = None;
    let found = match request.strategy {
        Strategy::Bfs => s.bfs().map(Found::Node),
        Strategy::Dfs => s.dfs().map(Found::Node),
        Strategy::Ucs => s.ucs().map(Found::Node),
        Strategy::Dls { limit } => s.dls(limit).map(Found::Node),
        Strategy::Iddfs => s.iddfs().map(|(d, id)| {
            depth = Some(d);
            Found::Node(id)
        }),
        Strategy::Bidirectional => s
            .bidirectional()
            .map(|(forward, backward)| Found::Meeting { forward, backward }),
    };

    let outcome = s.finish(found, depth);
    if cancel.is_cancelled() && !outcome.found {
        log::debug!(
            "{}: cancelled after {} visits",
            request.strategy,
            outcome.visited
        );
    } else {
        log::debug!(
            "{}: {} ({} edges, {} visits)",
            request.strategy,
            outcome,
            outcome.edges(),
            outcome.visited
        );
    }
    Ok(outcome)
}

/// How a strategy reached the target.
enum Found {
    Node(NodeId),
    Meeting { forward: NodeId, backward: NodeId },
}

/// State owned by one search call. The strategies live in their own
/// modules as further `impl` blocks.
pub(crate) struct Searcher<'a, O: StepObserver + ?Sized> {
    pub(crate) grid: &'a Grid,
    pub(crate) start: Pos,
    pub(crate) target: Pos,
    pub(crate) config: &'a SearchConfig,
    cancel: &'a CancelToken,
    observer: &'a mut O,
    pub(crate) arena: NodeArena,
    // Visits in the current pass, and over the whole call.
    visits: usize,
    total_visits: usize,
    // Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Pos>,
}

impl<O: StepObserver + ?Sized> Searcher<'_, O> {
    #[inline]
    pub(crate) fn cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    #[inline]
    fn is_endpoint(&self, p: Pos) -> bool {
        p == self.start || p == self.target
    }

    /// Report that `p` is being expanded.
    pub(crate) fn visit(&mut self, p: Pos) {
        if self.cancelled() || self.is_endpoint(p) {
            return;
        }
        self.visits += 1;
        self.total_visits += 1;
        self.observer.on_step(Step {
            pos: p,
            kind: StepKind::Visited,
            order: self.visits,
        });
    }

    /// Report that `p` joined the frontier, if frontier reporting is on.
    pub(crate) fn enqueued(&mut self, p: Pos) {
        if !self.config.report_frontier || self.cancelled() || self.is_endpoint(p) {
            return;
        }
        self.observer.on_step(Step {
            pos: p,
            kind: StepKind::Frontier,
            order: 0,
        });
    }

    /// Start a fresh iterative-deepening pass.
    pub(crate) fn restart(&mut self, depth: usize) {
        self.arena.clear();
        self.visits = 0;
        self.observer.on_restart(depth);
    }

    fn finish(&self, found: Option<Found>, depth: Option<usize>) -> SearchOutcome {
        match found {
            Some(Found::Node(id)) => {
                let mut out =
                    SearchOutcome::with_path(path::reconstruct(&self.arena, id), self.total_visits);
                out.depth = depth;
                out
            }
            Some(Found::Meeting { forward, backward }) => {
                let mut out = SearchOutcome::with_path(
                    path::merge(&self.arena, forward, backward),
                    self.total_visits,
                );
                out.meeting = Some(self.arena.get(forward).pos);
                out
            }
            None => SearchOutcome::not_found(self.total_visits),
        }
    }
}
