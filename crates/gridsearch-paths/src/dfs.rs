use crate::node::NodeId;
use crate::observer::StepObserver;
use crate::search::Searcher;

impl<O: StepObserver + ?Sized> Searcher<'_, O> {
    /// Depth-first search.
    ///
    /// Positions are marked visited when popped, so a position may sit on
    /// the stack several times; later copies are skipped. Neighbours are
    /// pushed in reverse move order so the first move is explored first.
    pub(crate) fn dfs(&mut self) -> Option<NodeId> {
        let mut visited = vec![false; self.grid.len()];
        let mut stack = vec![self.arena.root(self.start)];

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            if self.cancelled() {
                break None;
            }
            let Some(ci) = stack.pop() else {
                break None;
            };
            let cp = self.arena.get(ci).pos;
            if cp == self.target {
                break Some(ci);
            }
            let Some(i) = self.grid.index(cp) else {
                continue;
            };
            if visited[i] {
                continue;
            }
            visited[i] = true;
            self.visit(cp);

            nbuf.clear();
            self.grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter().rev() {
                let Some(ni) = self.grid.index(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                stack.push(self.arena.child(ci, np, 1));
                self.enqueued(np);
            }
        };

        self.nbuf = nbuf;
        found
    }
}
