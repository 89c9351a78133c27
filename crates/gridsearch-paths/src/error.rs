//! Errors reported before a search starts.
//!
//! Only a malformed request is an error. Not finding the target, being
//! cancelled and hitting the iterative-deepening depth cap all produce an
//! ordinary [`SearchOutcome`](crate::SearchOutcome) with `found == false`.

use std::fmt;

use gridsearch_core::Pos;
use thiserror::Error;

/// Which end of the search an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Target => "target",
        })
    }
}

/// A search request that cannot run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no start position set")]
    MissingStart,

    #[error("no target position set")]
    MissingTarget,

    #[error("start and target are both {0}")]
    SameEndpoints(Pos),

    #[error("{which} {pos} is outside the grid")]
    OutOfBounds { which: Endpoint, pos: Pos },

    #[error("{which} {pos} is on an obstacle")]
    Blocked { which: Endpoint, pos: Pos },
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
