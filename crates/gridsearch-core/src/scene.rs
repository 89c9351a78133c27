//! The editable board: a [`Grid`] plus optional start and target.
//!
//! [`Scene`] holds the editing rules an interactive front end applies
//! between searches: placing an endpoint clears any wall beneath it, and
//! walls are never painted over an endpoint.
//!
//! Scenes also round-trip through a small text layout, one line per row:
//!
//! ```text
//! S..#.
//! ...#.
//! .....
//! ...#T
//! ```
//!
//! `.` (or `0`) is empty, `#` is an obstacle, `S` and `T` mark the start
//! and target.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::Cell;
use crate::geom::Pos;
use crate::grid::Grid;

/// Errors from editing or parsing a [`Scene`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),

    #[error("layout is empty")]
    EmptyLayout,

    #[error("layout row {row} has {found} cells, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Pos },

    #[error("layout marks \u{201c}{ch}\u{201d} twice, at {first} and {second}")]
    Duplicate { ch: char, first: Pos, second: Pos },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// A grid together with the search endpoints placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    grid: Grid,
    start: Option<Pos>,
    target: Option<Pos>,
}

impl Scene {
    /// An empty `rows × cols` scene with no endpoints.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::from_grid(Grid::new(rows, cols))
    }

    /// Wrap an existing grid. No endpoints are placed.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            target: None,
        }
    }

    /// The occupancy grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The start position, if placed.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// The target position, if placed.
    #[inline]
    pub fn target(&self) -> Option<Pos> {
        self.target
    }

    /// Move the start to `p`, clearing any obstacle there.
    pub fn place_start(&mut self, p: Pos) -> SceneResult<()> {
        self.start = Some(self.clear_for_endpoint(p)?);
        Ok(())
    }

    /// Move the target to `p`, clearing any obstacle there.
    pub fn place_target(&mut self, p: Pos) -> SceneResult<()> {
        self.target = Some(self.clear_for_endpoint(p)?);
        Ok(())
    }

    fn clear_for_endpoint(&mut self, p: Pos) -> SceneResult<Pos> {
        if !self.grid.contains(p) {
            return Err(SceneError::OutOfBounds(p));
        }
        self.grid.set(p, Cell::Empty);
        Ok(p)
    }

    /// Whether `p` is the start or the target.
    #[inline]
    pub fn is_endpoint(&self, p: Pos) -> bool {
        self.start == Some(p) || self.target == Some(p)
    }

    /// Toggle the wall at `p` and return the new cell state.
    ///
    /// Returns `None`, leaving the grid untouched, when `p` is out of
    /// bounds or holds the start or the target.
    pub fn toggle_wall(&mut self, p: Pos) -> Option<Cell> {
        if self.is_endpoint(p) {
            return None;
        }
        self.grid.toggle(p)
    }

    /// Set the cell at `p`. Obstacles are refused on endpoints; returns
    /// whether the grid was written.
    pub fn set_cell(&mut self, p: Pos, cell: Cell) -> bool {
        if !self.grid.contains(p) || (cell == Cell::Obstacle && self.is_endpoint(p)) {
            return false;
        }
        self.grid.set(p, cell);
        true
    }

    /// Remove every obstacle, keeping the endpoints.
    pub fn clear_walls(&mut self) {
        self.grid.fill(Cell::Empty);
    }

    /// Remove every obstacle and both endpoints.
    pub fn reset(&mut self) {
        self.grid.fill(Cell::Empty);
        self.start = None;
        self.target = None;
    }

    /// Parse a text layout (see the module docs).
    pub fn parse(s: &str) -> SceneResult<Self> {
        let lines: Vec<&str> = s
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(SceneError::EmptyLayout);
        };
        let width = first.chars().count();

        let mut scene = Self::new(lines.len() as i32, width as i32);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(SceneError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                match ch {
                    '.' | '0' => {}
                    '#' => scene.grid.set(pos, Cell::Obstacle),
                    'S' => Self::mark(&mut scene.start, ch, pos)?,
                    'T' => Self::mark(&mut scene.target, ch, pos)?,
                    _ => return Err(SceneError::InvalidChar { ch, pos }),
                }
            }
        }
        Ok(scene)
    }

    fn mark(slot: &mut Option<Pos>, ch: char, pos: Pos) -> SceneResult<()> {
        if let Some(first) = *slot {
            return Err(SceneError::Duplicate {
                ch,
                first,
                second: pos,
            });
        }
        *slot = Some(pos);
        Ok(())
    }
}

impl FromStr for Scene {
    type Err = SceneError;

    fn from_str(s: &str) -> SceneResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.grid.cols() {
                let p = Pos::new(row, col);
                let ch = if self.start == Some(p) {
                    'S'
                } else if self.target == Some(p) {
                    'T'
                } else if self.grid.at(p) == Some(Cell::Obstacle) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
