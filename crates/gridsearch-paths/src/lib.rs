//! Uninformed path searches on six-connected occupancy grids.
//!
//! This crate runs the classic uninformed strategies over a
//! [`gridsearch_core::Grid`], one node visitation at a time:
//!
//! - **Breadth-first** search, shortest by edge count ([`Strategy::Bfs`])
//! - **Depth-first** search, reachability only ([`Strategy::Dfs`])
//! - **Uniform-cost** search with deterministic tie-breaking ([`Strategy::Ucs`])
//! - **Depth-limited** search ([`Strategy::Dls`])
//! - **Iterative-deepening** depth-first search ([`Strategy::Iddfs`])
//! - **Bidirectional** breadth-first search ([`Strategy::Bidirectional`])
//!
//! Every run goes through [`search`] (or [`SearchRequest::run`]). Progress is
//! reported to a [`StepObserver`] as nodes are visited, and a
//! [`CancelToken`](gridsearch_core::CancelToken) can stop any strategy
//! between steps.
//!
//! ```
//! use gridsearch_core::{CancelToken, Grid, Pos};
//! use gridsearch_paths::{NoopObserver, SearchRequest, Strategy};
//!
//! let grid = Grid::new(10, 10);
//! let request = SearchRequest::new(&grid, Pos::new(0, 0), Pos::new(0, 9), Strategy::Bfs);
//! let outcome = request.run(&mut NoopObserver, &CancelToken::new()).unwrap();
//! assert!(outcome.found);
//! assert_eq!(outcome.path.len(), 10);
//! ```

mod bfs;
mod bidirectional;
mod config;
mod dfs;
mod dls;
mod error;
mod node;
mod observer;
mod outcome;
mod path;
mod search;
mod strategy;
#[cfg(test)]
mod testing;
mod ucs;

pub use config::SearchConfig;
pub use error::{Endpoint, SearchError, SearchResult};
pub use node::{Node, NodeArena, NodeId};
pub use observer::{NoopObserver, Step, StepKind, StepLog, StepObserver};
pub use outcome::SearchOutcome;
pub use path::{merge, reconstruct};
pub use search::{SearchRequest, search};
pub use strategy::{DEFAULT_DLS_LIMIT, Strategy, StrategyParseError};
