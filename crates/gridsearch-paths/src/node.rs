//! Search-tree nodes and the arena that owns them.
//!
//! Each search run allocates its nodes in a [`NodeArena`]. A node's parent
//! is a [`NodeId`] into the same arena, so following a parent chain never
//! outlives the nodes it walks over.

use gridsearch_core::Pos;

/// Stable handle to a [`Node`] inside a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in its arena's storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A visited position, its path length from the root and its predecessor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub pos: Pos,
    pub parent: Option<NodeId>,
    pub cost: u32,
}

/// Append-only storage for the nodes of one search run.
#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node and return its handle.
    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add a parentless node with cost 0.
    pub fn root(&mut self, pos: Pos) -> NodeId {
        self.push(Node {
            pos,
            parent: None,
            cost: 0,
        })
    }

    /// Add a node reached from `parent` by a step costing `step`.
    pub fn child(&mut self, parent: NodeId, pos: Pos, step: u32) -> NodeId {
        let cost = self.get(parent).cost + step;
        self.push(Node {
            pos,
            parent: Some(parent),
            cost,
        })
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this arena (or was handed out
    /// before the last [`clear`](Self::clear)).
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of nodes allocated.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node. Previously returned handles become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterate from `id` up through its parents to the root, `id` first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

/// Iterator over a node and its parent chain. See [`NodeArena::ancestors`].
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let node = arena.get(self.next?);
        self.next = node.parent;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_costs_accumulate() {
        let mut arena = NodeArena::new();
        let a = arena.root(Pos::new(0, 0));
        let b = arena.child(a, Pos::new(0, 1), 1);
        let c = arena.child(b, Pos::new(1, 2), 1);
        assert_eq!(arena.get(a).cost, 0);
        assert_eq!(arena.get(c).cost, 2);
        assert_eq!(arena.get(c).parent, Some(b));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let mut arena = NodeArena::with_capacity(4);
        let a = arena.root(Pos::new(0, 0));
        let b = arena.child(a, Pos::new(1, 0), 1);
        // A sibling branch must not show up in b's chain.
        let _ = arena.child(a, Pos::new(0, 1), 1);
        let d = arena.child(b, Pos::new(2, 0), 1);
        let chain: Vec<Pos> = arena.ancestors(d).map(|n| n.pos).collect();
        assert_eq!(chain, vec![Pos::new(2, 0), Pos::new(1, 0), Pos::new(0, 0)]);
        assert_eq!(arena.ancestors(a).count(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut arena = NodeArena::new();
        arena.root(Pos::new(3, 3));
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.root(Pos::new(1, 1)).index(), 0);
    }
}
