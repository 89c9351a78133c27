use std::collections::VecDeque;

use crate::node::NodeId;
use crate::observer::StepObserver;
use crate::search::Searcher;

impl<O: StepObserver + ?Sized> Searcher<'_, O> {
    /// Breadth-first search.
    ///
    /// Positions are marked visited when they are enqueued, the start
    /// included, so each position enters the queue at most once and the
    /// first path to reach the target has the fewest edges.
    pub(crate) fn bfs(&mut self) -> Option<NodeId> {
        let mut visited = vec![false; self.grid.len()];
        let si = self.grid.index(self.start)?;
        visited[si] = true;

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(self.arena.root(self.start));

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            if self.cancelled() {
                break None;
            }
            let Some(ci) = queue.pop_front() else {
                break None;
            };
            let cp = self.arena.get(ci).pos;
            if cp == self.target {
                break Some(ci);
            }
            self.visit(cp);

            nbuf.clear();
            self.grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.grid.index(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                queue.push_back(self.arena.child(ci, np, 1));
                self.enqueued(np);
            }
        };

        self.nbuf = nbuf;
        found
    }
}

#[cfg(test)]
mod tests {
    use gridsearch_core::{CancelToken, Grid, Pos};

    use crate::config::SearchConfig;
    use crate::observer::StepLog;
    use crate::search::SearchRequest;
    use crate::strategy::Strategy;
    use crate::testing::{run, scene};

    #[test]
    fn open_row_is_walked_straight() {
        let grid = Grid::new(10, 10);
        let out = SearchRequest::new(&grid, Pos::new(0, 0), Pos::new(0, 9), Strategy::Bfs)
            .run(&mut StepLog::new(), &CancelToken::new())
            .unwrap();
        assert!(out.found);
        let row: Vec<Pos> = (0..10).map(|c| Pos::new(0, c)).collect();
        assert_eq!(out.path, row);
        assert_eq!(out.edges(), 9);
    }

    #[test]
    fn down_right_is_one_move_but_up_right_is_two() {
        let down_right = scene(
            "\
S..
...
..T",
        );
        let (out, _) = run(&down_right, Strategy::Bfs);
        assert_eq!(
            out.path,
            vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]
        );

        let up_right = scene(
            "\
..T
...
S..",
        );
        let (out, _) = run(&up_right, Strategy::Bfs);
        assert_eq!(out.edges(), 4);
    }

    #[test]
    fn visits_in_move_order() {
        let scene = scene(
            "\
...
.S.
..T",
        );
        let (out, log) = run(&scene, Strategy::Bfs);
        // The target is the down-right neighbour, dequeued after up, right
        // and down have been expanded.
        assert_eq!(out.edges(), 1);
        assert_eq!(
            log.visited().collect::<Vec<_>>(),
            vec![Pos::new(0, 1), Pos::new(1, 2), Pos::new(2, 1)]
        );
    }

    #[test]
    fn frontier_reported_on_request() {
        let scene = scene("S.T");
        let (_, log) = run(&scene, Strategy::Bfs);
        assert_eq!(log.frontier().count(), 0);

        let mut log = StepLog::new();
        SearchRequest::from_scene(&scene, Strategy::Bfs)
            .with_config(SearchConfig::default().with_frontier(true))
            .run(&mut log, &CancelToken::new())
            .unwrap();
        assert_eq!(log.frontier().collect::<Vec<_>>(), vec![Pos::new(0, 1)]);
        assert_eq!(log.visited().collect::<Vec<_>>(), vec![Pos::new(0, 1)]);
    }
}
