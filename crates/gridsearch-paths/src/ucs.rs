use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridsearch_core::Move;

use crate::node::NodeId;
use crate::observer::StepObserver;
use crate::search::Searcher;

/// Sentinel cost for positions never dequeued.
const UNREACHED: u32 = u32::MAX;

/// Priority-queue entry, ordered by cost and then by insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    cost: u32,
    seq: u64,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest, oldest first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<O: StepObserver + ?Sized> Searcher<'_, O> {
    /// Uniform-cost search.
    ///
    /// A position's cost is recorded when it is first dequeued; any later
    /// entry for it costing the same or more is stale and skipped. Equal
    /// costs pop in insertion order.
    pub(crate) fn ucs(&mut self) -> Option<NodeId> {
        let mut best = vec![UNREACHED; self.grid.len()];
        let mut open: BinaryHeap<Entry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        open.push(Entry {
            cost: 0,
            seq,
            node: self.arena.root(self.start),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            if self.cancelled() {
                break None;
            }
            let Some(current) = open.pop() else {
                break None;
            };
            let cp = self.arena.get(current.node).pos;
            if cp == self.target {
                break Some(current.node);
            }
            let Some(ci) = self.grid.index(cp) else {
                continue;
            };
            // Skip stale entries.
            if best[ci] <= current.cost {
                continue;
            }
            best[ci] = current.cost;
            self.visit(cp);

            nbuf.clear();
            self.grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.grid.index(np) else {
                    continue;
                };
                let step = Move::between(cp, np).map_or(1, Move::cost);
                let tentative = current.cost + step;
                if tentative >= best[ni] {
                    continue;
                }
                seq += 1;
                open.push(Entry {
                    cost: tentative,
                    seq,
                    node: self.arena.child(current.node, np, step),
                });
                self.enqueued(np);
            }
        };

        self.nbuf = nbuf;
        found
    }
}
