use std::collections::VecDeque;

use gridsearch_core::Pos;

use crate::node::NodeId;
use crate::observer::StepObserver;
use crate::search::Searcher;

/// One direction of a bidirectional search.
struct Side {
    queue: VecDeque<NodeId>,
    /// Position index -> node that discovered it.
    seen: Vec<Option<NodeId>>,
}

impl<O: StepObserver + ?Sized> Searcher<'_, O> {
    /// Bidirectional breadth-first search.
    ///
    /// Alternates single expansions between a frontier grown from the
    /// start and one grown from the target. The search meets when a node
    /// just expanded on one side has already been discovered by the other;
    /// the result is `(forward, backward)`, the two nodes at the meeting
    /// position.
    pub(crate) fn bidirectional(&mut self) -> Option<(NodeId, NodeId)> {
        let mut forward = self.side(self.start);
        let mut backward = self.side(self.target);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let met = loop {
            if self.cancelled() || forward.queue.is_empty() || backward.queue.is_empty() {
                break None;
            }
            if let Some((f, b)) = self.expand(&mut forward, &backward, &mut nbuf) {
                break Some((f, b));
            }

            if self.cancelled() || backward.queue.is_empty() {
                break None;
            }
            if let Some((b, f)) = self.expand(&mut backward, &forward, &mut nbuf) {
                break Some((f, b));
            }
        };

        self.nbuf = nbuf;
        met
    }

    fn side(&mut self, root: Pos) -> Side {
        let mut seen = vec![None; self.grid.len()];
        let id = self.arena.root(root);
        if let Some(i) = self.grid.index(root) {
            seen[i] = Some(id);
        }
        Side {
            queue: VecDeque::from([id]),
            seen,
        }
    }

    /// Expand the next node of `side`. Returns that node and the `other`
    /// side's node at the same position if the two searches have met.
    fn expand(
        &mut self,
        side: &mut Side,
        other: &Side,
        nbuf: &mut Vec<Pos>,
    ) -> Option<(NodeId, NodeId)> {
        let ci = side.queue.pop_front()?;
        let cp = self.arena.get(ci).pos;
        self.visit(cp);

        let idx = self.grid.index(cp)?;
        if let Some(meet) = other.seen[idx] {
            return Some((ci, meet));
        }

        nbuf.clear();
        self.grid.neighbors(cp, nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = self.grid.index(np) else {
                continue;
            };
            if side.seen[ni].is_some() {
                continue;
            }
            let child = self.arena.child(ci, np, 1);
            side.seen[ni] = Some(child);
            side.queue.push_back(child);
            self.enqueued(np);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use gridsearch_core::{CancelToken, Grid, Pos};

    use crate::observer::StepLog;
    use crate::search::SearchRequest;
    use crate::strategy::Strategy;
    use crate::testing::{assert_valid_path, run, run_with_frontier, scene};

    #[test]
    fn open_row_meets_in_between() {
        let grid = Grid::new(10, 10);
        let req = SearchRequest::new(
            &grid,
            Pos::new(0, 0),
            Pos::new(0, 9),
            Strategy::Bidirectional,
        );
        let out = req.run(&mut StepLog::new(), &CancelToken::new()).unwrap();
        assert!(out.found);
        assert_eq!(out.path.first(), Some(&Pos::new(0, 0)));
        assert_eq!(out.path.last(), Some(&Pos::new(0, 9)));
        let meeting = out.meeting.unwrap();
        assert_eq!(out.path.iter().filter(|&&p| p == meeting).count(), 1);
        assert_ne!(meeting, Pos::new(0, 0));
        assert_ne!(meeting, Pos::new(0, 9));
    }

    #[test]
    fn adjacent_endpoints() {
        let pair = scene("ST.");
        let (out, log) = run(&pair, Strategy::Bidirectional);
        assert_eq!(out.path, vec![Pos::new(0, 0), Pos::new(0, 1)]);
        assert_eq!(out.meeting, Some(Pos::new(0, 1)));
        assert!(log.steps.is_empty());
    }

    #[test]
    fn alternates_sides() {
        let corridor = scene("S.....T");
        let (out, log) = run(&corridor, Strategy::Bidirectional);
        assert_eq!(out.edges(), 6);
        // Start and target expansions are not reported; after them the
        // forward and backward frontiers take turns.
        assert_eq!(
            log.visited().collect::<Vec<_>>(),
            vec![Pos::new(0, 1), Pos::new(0, 5), Pos::new(0, 2), Pos::new(0, 4), Pos::new(0, 3)]
        );
        assert_eq!(out.meeting, Some(Pos::new(0, 3)));
    }

    #[test]
    fn contiguous_through_a_maze() {
        let maze = scene(
            "\
S.#.....
..#.##.#
..#..#..
.###.#.#
.....#.T",
        );
        let (out, _) = run(&maze, Strategy::Bidirectional);
        let (bfs, _) = run(&maze, Strategy::Bfs);
        assert!(out.found);
        assert_valid_path(&maze, &out.path);
        assert!(out.edges() >= bfs.edges());
    }

    #[test]
    fn stops_when_one_side_is_boxed_in() {
        let boxed = scene(
            "\
S#...
##...
....T",
        );
        let (out, log) = run(&boxed, Strategy::Bidirectional);
        assert!(!out.found);
        assert!(log.steps.is_empty());
    }

    #[test]
    fn frontier_reported_on_request() {
        let row = scene("S..T");
        let (_, log) = run(&row, Strategy::Bidirectional);
        assert_eq!(log.frontier().count(), 0);

        // Each side queues its own copy of (0, 2).
        let (out, log) = run_with_frontier(&row, Strategy::Bidirectional);
        assert_eq!(out.meeting, Some(Pos::new(0, 2)));
        assert_eq!(
            log.frontier().collect::<Vec<_>>(),
            vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 2)]
        );
        assert_eq!(
            log.visited().collect::<Vec<_>>(),
            vec![Pos::new(0, 1), Pos::new(0, 2)]
        );
    }
}
