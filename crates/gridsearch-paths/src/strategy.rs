//! The closed set of search strategies.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Depth limit used by [`Strategy::dls`] and by `"dls"` without a limit.
pub const DEFAULT_DLS_LIMIT: usize = 10;

/// A search strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Uniform-cost search.
    Ucs,
    /// Depth-limited search, never following a path longer than `limit`.
    Dls { limit: usize },
    /// Iterative-deepening depth-first search.
    Iddfs,
    /// Breadth-first search from both ends at once.
    Bidirectional,
}

impl Strategy {
    /// Every strategy, DLS at its default limit.
    pub const ALL: [Strategy; 6] = [
        Self::Bfs,
        Self::Dfs,
        Self::Ucs,
        Self::dls(),
        Self::Iddfs,
        Self::Bidirectional,
    ];

    /// Depth-limited search with [`DEFAULT_DLS_LIMIT`].
    pub const fn dls() -> Self {
        Self::Dls {
            limit: DEFAULT_DLS_LIMIT,
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
            Self::Dls { .. } => "DLS",
            Self::Iddfs => "IDDFS",
            Self::Bidirectional => "Bidirectional",
        }
    }

    /// Whether a found path is guaranteed to be a shortest one.
    pub const fn is_shortest(self) -> bool {
        matches!(self, Self::Bfs | Self::Ucs)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search strategy \u{201c}{0}\u{201d}")]
pub struct StrategyParseError(pub String);

impl FromStr for Strategy {
    type Err = StrategyParseError;

    /// Parse a case-insensitive name. `dls` takes an optional limit as
    /// `dls:N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (name, arg) = match lower.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (lower.as_str(), None),
        };
        let err = || StrategyParseError(s.to_string());
        let strategy = match name {
            "bfs" => Self::Bfs,
            "dfs" => Self::Dfs,
            "ucs" => Self::Ucs,
            "dls" => {
                let limit = match arg {
                    Some(a) => a.parse().map_err(|_| err())?,
                    None => DEFAULT_DLS_LIMIT,
                };
                return Ok(Self::Dls { limit });
            }
            "iddfs" => Self::Iddfs,
            "bidirectional" | "bidir" => Self::Bidirectional,
            _ => return Err(err()),
        };
        if arg.is_some() {
            return Err(err());
        }
        Ok(strategy)
    }
}
