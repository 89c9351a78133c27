use std::fmt;

use gridsearch_core::Pos;

/// What a search produced.
///
/// A cancelled search looks exactly like an exhausted one here; callers
/// that care ask their [`CancelToken`](gridsearch_core::CancelToken).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub found: bool,
    /// Start to target inclusive, or empty when nothing was found.
    pub path: Vec<Pos>,
    /// Depth limit of the successful pass (iterative deepening only).
    pub depth: Option<usize>,
    /// Number of visit events reported to the observer.
    pub visited: usize,
    /// Where the two frontiers met (bidirectional search only).
    pub meeting: Option<Pos>,
}

impl SearchOutcome {
    /// An outcome without a path.
    pub fn not_found(visited: usize) -> Self {
        Self {
            visited,
            ..Self::default()
        }
    }

    /// An outcome carrying `path`.
    pub fn with_path(path: Vec<Pos>, visited: usize) -> Self {
        Self {
            found: !path.is_empty(),
            path,
            visited,
            ..Self::default()
        }
    }

    /// Number of moves along the path.
    #[inline]
    pub fn edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.found, self.depth) {
            (true, Some(depth)) => write!(f, "Target Found! Depth: {depth}"),
            (true, None) => f.write_str("Target Found!"),
            (false, _) => f.write_str("No Path Found."),
        }
    }
}
