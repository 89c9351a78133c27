//! **gridsearch-core**: the board that path searches run on.
//!
//! This crate provides the foundational types shared by the *gridsearch*
//! workspace: grid positions, the six-direction move set, the occupancy
//! [`Grid`], the editable [`Scene`] (grid plus start/target), and the
//! cooperative [`CancelToken`].

pub mod cancel;
pub mod cell;
pub mod geom;
pub mod grid;
pub mod moves;
pub mod scene;

pub use cancel::CancelToken;
pub use cell::Cell;
pub use geom::Pos;
pub use grid::Grid;
pub use moves::{MOVES, Move, distance};
pub use scene::{Scene, SceneError};
