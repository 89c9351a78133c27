//! Turning search-tree nodes into coordinate paths.

use gridsearch_core::Pos;

use crate::node::{NodeArena, NodeId};

/// The path from the root of `id`'s tree to `id`, root first.
pub fn reconstruct(arena: &NodeArena, id: NodeId) -> Vec<Pos> {
    let mut path: Vec<Pos> = arena.ancestors(id).map(|n| n.pos).collect();
    path.reverse();
    path
}

/// Join two trees that met at the same position.
///
/// `forward` and `backward` are the nodes at the meeting point in the
/// start-rooted and target-rooted trees. The result runs from the start
/// through the meeting point (once) to the target.
pub fn merge(arena: &NodeArena, forward: NodeId, backward: NodeId) -> Vec<Pos> {
    let mut path = reconstruct(arena, forward);
    path.extend(arena.ancestors(backward).skip(1).map(|n| n.pos));
    path
}
