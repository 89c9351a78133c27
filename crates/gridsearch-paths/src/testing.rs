//! Shared helpers for the strategy tests.

use std::collections::HashSet;

use gridsearch_core::{CancelToken, Move, Pos, Scene};

use crate::config::SearchConfig;
use crate::observer::StepLog;
use crate::outcome::SearchOutcome;
use crate::search::SearchRequest;
use crate::strategy::Strategy;

pub(crate) fn scene(layout: &str) -> Scene {
    Scene::parse(layout).expect("valid layout")
}

/// Run `strategy` on `scene` with frontier reporting off.
pub(crate) fn run(scene: &Scene, strategy: Strategy) -> (SearchOutcome, StepLog) {
    let mut log = StepLog::new();
    let out = SearchRequest::from_scene(scene, strategy)
        .run(&mut log, &CancelToken::new())
        .expect("valid request");
    (out, log)
}

/// Run `strategy` on `scene` with frontier reporting on.
pub(crate) fn run_with_frontier(scene: &Scene, strategy: Strategy) -> (SearchOutcome, StepLog) {
    let mut log = StepLog::new();
    let out = SearchRequest::from_scene(scene, strategy)
        .with_config(SearchConfig::default().with_frontier(true))
        .run(&mut log, &CancelToken::new())
        .expect("valid request");
    (out, log)
}

/// Endpoints match, every step is a legal move onto a free cell, and no
/// cell repeats.
pub(crate) fn assert_valid_path(scene: &Scene, path: &[Pos]) {
    assert_eq!(path.first().copied(), scene.start(), "path {path:?}");
    assert_eq!(path.last().copied(), scene.target(), "path {path:?}");
    for w in path.windows(2) {
        assert!(
            Move::between(w[0], w[1]).is_some(),
            "{} -> {} is not a move in {path:?}",
            w[0],
            w[1]
        );
    }
    for p in path {
        assert!(scene.grid().is_passable(*p), "{p} is blocked in {path:?}");
    }
    let unique: HashSet<Pos> = path.iter().copied().collect();
    assert_eq!(unique.len(), path.len(), "repeated cell in {path:?}");
}
