//! The [`Grid`] type: a fixed-size occupancy map.
//!
//! A `Grid` stores one [`Cell`] per square in row-major order. Its
//! dimensions are fixed at construction; only cell contents change, and
//! only between searches (a running search holds a shared borrow).

use crate::cell::Cell;
use crate::geom::Pos;
use crate::moves::MOVES;

/// A `rows × cols` occupancy map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a new grid of empty cells. Negative dimensions are clamped
    /// to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            cells: vec![Cell::Empty; rows as usize * cols as usize],
            rows,
            cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if `p` is out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let cols = self.cols.max(1) as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Pos) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Pos, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Flip the cell at `p` between empty and obstacle, returning the new
    /// state, or `None` if out of bounds.
    pub fn toggle(&mut self, p: Pos) -> Option<Cell> {
        let i = self.index(p)?;
        let next = self.cells[i].toggled();
        self.cells[i] = next;
        Some(next)
    }

    /// Fill the entire grid with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Whether a search may stand on `p`: in bounds and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Append the passable neighbours of `p` into `buf`, in [`MOVES`]
    /// order. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        for m in MOVES {
            let n = m.apply(p);
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }

    /// Row-major iterator over `(Pos, Cell)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.pos(i), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(5, 10);
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.len(), 50);
        assert_eq!(Grid::new(-3, 4).len(), 0);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Pos::new(2, 3);
        g.set(p, Cell::Obstacle);
        assert_eq!(g.at(p), Some(Cell::Obstacle));
        assert_eq!(g.at(Pos::new(0, 0)), Some(Cell::Empty));
        assert_eq!(g.at(Pos::new(10, 10)), None);
        assert_eq!(g.at(Pos::new(-1, 0)), None);
        // Out of bounds writes are ignored.
        g.set(Pos::new(4, 0), Cell::Obstacle);
        assert_eq!(g.count(Cell::Obstacle), 1);
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(3, 7);
        for (p, _) in g.iter() {
            let i = g.index(p).unwrap();
            assert_eq!(g.pos(i), p);
        }
        assert_eq!(g.index(Pos::new(1, 2)), Some(9));
        assert_eq!(g.index(Pos::new(0, 7)), None);
    }

    #[test]
    fn toggle_fill_and_count() {
        let mut g = Grid::new(5, 5);
        g.fill(Cell::Obstacle);
        assert_eq!(g.count(Cell::Obstacle), 25);
        assert_eq!(g.toggle(Pos::new(0, 0)), Some(Cell::Empty));
        assert_eq!(g.count(Cell::Obstacle), 24);
        assert_eq!(g.toggle(Pos::new(0, 0)), Some(Cell::Obstacle));
        assert_eq!(g.toggle(Pos::new(9, 9)), None);
    }

    #[test]
    fn passability() {
        let mut g = Grid::new(3, 3);
        g.set(Pos::new(1, 1), Cell::Obstacle);
        assert!(g.is_passable(Pos::new(0, 0)));
        assert!(!g.is_passable(Pos::new(1, 1)));
        assert!(!g.is_passable(Pos::new(3, 0)));
        assert!(!g.is_passable(Pos::new(0, -1)));
    }

    #[test]
    fn neighbors_follow_move_order() {
        let g = Grid::new(5, 5);
        let mut buf = Vec::new();
        g.neighbors(Pos::new(2, 2), &mut buf);
        assert_eq!(
            buf,
            vec![
                Pos::new(1, 2),
                Pos::new(2, 3),
                Pos::new(3, 2),
                Pos::new(3, 3),
                Pos::new(2, 1),
                Pos::new(1, 1),
            ]
        );
    }

    #[test]
    fn neighbors_filter_bounds_and_walls() {
        let mut g = Grid::new(3, 3);
        g.set(Pos::new(0, 1), Cell::Obstacle);
        let mut buf = Vec::new();
        g.neighbors(Pos::new(0, 0), &mut buf);
        // Up, left and up-left are off the grid; right is a wall.
        assert_eq!(buf, vec![Pos::new(1, 0), Pos::new(1, 1)]);
    }
}
