//! The [`Cell`] type: the occupancy state of one grid square.

/// Occupancy of a grid square.
///
/// Start and target are positions carried next to the grid, never cell
/// states, so a cell is only ever empty or blocked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Obstacle,
}

impl Cell {
    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The other state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Empty => Self::Obstacle,
            Self::Obstacle => Self::Empty,
        }
    }
}
