/// Knobs shared by every strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Also report frontier insertions to the observer, not just visits.
    pub report_frontier: bool,
    /// Deepest pass iterative deepening tries before giving up. `None`
    /// means the grid's cell count, the longest a simple path can be.
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    /// Report frontier insertions (builder).
    pub fn with_frontier(mut self, report: bool) -> Self {
        self.report_frontier = report;
        self
    }

    /// Cap iterative deepening at `depth` (builder).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// The effective iterative-deepening cap on a grid of `cells` cells.
    #[inline]
    pub fn depth_cap(&self, cells: usize) -> usize {
        self.max_depth.unwrap_or(cells)
    }
}
