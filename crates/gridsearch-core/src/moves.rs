//! The six-direction move set.
//!
//! Adjacency is defined by six relative offsets: up, right, down,
//! down-right, left and up-left. Up-right and down-left are *not* moves.
//! The set is closed under reversal (every move's opposite is also a move),
//! so a search run backwards from the target sees the same graph as one
//! run forwards from the start.
//!
//! [`MOVES`] fixes the order in which neighbours are generated. Every
//! strategy relies on it for tie-breaking, so changing it changes which of
//! several equal-length paths is returned.

use crate::geom::Pos;

/// One step on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Up,
    Right,
    Down,
    DownRight,
    Left,
    UpLeft,
}

/// All moves, in neighbour-generation order.
pub const MOVES: [Move; 6] = [
    Move::Up,
    Move::Right,
    Move::Down,
    Move::DownRight,
    Move::Left,
    Move::UpLeft,
];

impl Move {
    /// Relative `(row, col)` offset of this move.
    #[inline]
    pub const fn offset(self) -> Pos {
        match self {
            Self::Up => Pos::new(-1, 0),
            Self::Right => Pos::new(0, 1),
            Self::Down => Pos::new(1, 0),
            Self::DownRight => Pos::new(1, 1),
            Self::Left => Pos::new(0, -1),
            Self::UpLeft => Pos::new(-1, -1),
        }
    }

    /// Cost of taking this move. Every edge of the grid graph costs 1.
    #[inline]
    pub const fn cost(self) -> u32 {
        1
    }

    /// The move that undoes this one.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
            Self::Left => Self::Right,
            Self::UpLeft => Self::DownRight,
        }
    }

    /// Apply this move to `p`. The result may lie outside any grid.
    #[inline]
    pub fn apply(self, p: Pos) -> Pos {
        p + self.offset()
    }

    /// The move stepping from `from` to `to`, if the two are adjacent.
    pub fn between(from: Pos, to: Pos) -> Option<Self> {
        let d = to - from;
        MOVES.into_iter().find(|m| m.offset() == d)
    }
}

/// Length of the shortest path from `a` to `b` on an unobstructed grid.
///
/// When the row and column deltas share a sign the diagonal move covers
/// both at once, otherwise each axis has to be walked separately.
#[inline]
pub fn distance(a: Pos, b: Pos) -> u32 {
    let dr = b.row - a.row;
    let dc = b.col - a.col;
    if (dr >= 0) == (dc >= 0) {
        dr.unsigned_abs().max(dc.unsigned_abs())
    } else {
        dr.unsigned_abs() + dc.unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_in_order() {
        let offsets: Vec<Pos> = MOVES.iter().map(|m| m.offset()).collect();
        assert_eq!(
            offsets,
            vec![
                Pos::new(-1, 0),
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(0, -1),
                Pos::new(-1, -1),
            ]
        );
    }

    #[test]
    fn no_up_right_or_down_left() {
        let origin = Pos::new(5, 5);
        assert_eq!(Move::between(origin, Pos::new(4, 6)), None);
        assert_eq!(Move::between(origin, Pos::new(6, 4)), None);
        assert_eq!(Move::between(origin, Pos::new(6, 6)), Some(Move::DownRight));
        assert_eq!(Move::between(origin, origin), None);
    }

    #[test]
    fn closed_under_reversal() {
        for m in MOVES {
            assert_eq!(m.reverse().offset(), -m.offset());
            assert_eq!(m.reverse().reverse(), m);
        }
    }

    #[test]
    fn distance_matches_move_set() {
        let o = Pos::new(0, 0);
        assert_eq!(distance(o, Pos::new(0, 9)), 9);
        assert_eq!(distance(o, Pos::new(3, 3)), 3);
        assert_eq!(distance(o, Pos::new(3, 5)), 5);
        // Up-right needs two moves.
        assert_eq!(distance(o, Pos::new(-1, 1)), 2);
        assert_eq!(distance(Pos::new(4, 4), Pos::new(1, 1)), 3);
        assert_eq!(distance(Pos::new(2, 7), Pos::new(2, 7)), 0);
    }
}
