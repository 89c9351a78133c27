//! Depth-limited and iterative-deepening depth-first search.
//!
//! Both run on an explicit stack of frames instead of native recursion,
//! so a generous limit on a large grid cannot overflow the call stack.

use gridsearch_core::MOVES;

use crate::node::NodeId;
use crate::observer::StepObserver;
use crate::search::Searcher;

/// A node being expanded: how much depth it has left and which move to
/// try next.
struct Frame {
    node: NodeId,
    remaining: usize,
    next: usize,
}

/// What happened on stepping onto a node.
enum Enter {
    Found,
    Leaf,
    Expand,
}

impl<O: StepObserver + ?Sized> Searcher<'_, O> {
    /// Depth-limited search from the start, following paths of at most
    /// `limit` moves.
    ///
    /// The visited set spans the whole call rather than the current path:
    /// once a position has been expanded, later branches never re-enter it,
    /// even if they arrive with more depth to spare. A position reached
    /// with no depth left is only tested against the target, not marked.
    pub(crate) fn dls(&mut self, limit: usize) -> Option<NodeId> {
        let mut visited = vec![false; self.grid.len()];
        let root = self.arena.root(self.start);
        let mut stack = match self.enter(root, limit, &mut visited) {
            Enter::Found => return Some(root),
            Enter::Leaf => return None,
            Enter::Expand => vec![Frame {
                node: root,
                remaining: limit,
                next: 0,
            }],
        };

        while let Some(frame) = stack.last_mut() {
            if self.cancelled() {
                return None;
            }
            let cp = self.arena.get(frame.node).pos;

            // Neighbours are checked against `visited` only when their turn
            // comes, after earlier siblings' subtrees have been explored.
            let mut step = None;
            while step.is_none() && frame.next < MOVES.len() {
                let m = MOVES[frame.next];
                frame.next += 1;
                let np = m.apply(cp);
                if !self.grid.is_passable(np) {
                    continue;
                }
                if let Some(ni) = self.grid.index(np) {
                    if !visited[ni] {
                        step = Some((m, np));
                    }
                }
            }
            let Some((m, np)) = step else {
                stack.pop();
                continue;
            };

            let parent = frame.node;
            let remaining = frame.remaining - 1;
            let child = self.arena.child(parent, np, m.cost());
            match self.enter(child, remaining, &mut visited) {
                Enter::Found => return Some(child),
                Enter::Leaf => {}
                Enter::Expand => stack.push(Frame {
                    node: child,
                    remaining,
                    next: 0,
                }),
            }
        }
        None
    }

    fn enter(&mut self, id: NodeId, remaining: usize, visited: &mut [bool]) -> Enter {
        if self.cancelled() {
            return Enter::Leaf;
        }
        let p = self.arena.get(id).pos;
        if p == self.target {
            return Enter::Found;
        }
        if remaining == 0 {
            return Enter::Leaf;
        }
        if let Some(i) = self.grid.index(p) {
            visited[i] = true;
        }
        self.visit(p);
        Enter::Expand
    }

    /// Iterative-deepening search: depth-limited passes with limits 0, 1,
    /// 2, ... until one reaches the target. Returns that pass's limit
    /// together with the target node.
    ///
    /// Gives up once the limit would exceed the configured cap (by default
    /// the number of cells, which no simple path can exceed).
    pub(crate) fn iddfs(&mut self) -> Option<(usize, NodeId)> {
        let cap = self.config.depth_cap(self.grid.len());
        let mut depth = 0;
        while !self.cancelled() {
            log::trace!("IDDFS: pass with depth limit {depth}");
            self.restart(depth);
            if let Some(id) = self.dls(depth) {
                return Some((depth, id));
            }
            depth += 1;
            if depth > cap {
                log::debug!("IDDFS: no path within depth {cap}");
                break;
            }
        }
        None
    }
}
