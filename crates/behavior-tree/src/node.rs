//! The closed set of node variants a tree is made of.

use crate::{Behavior, Fallback, Leaf, Sequence, Status};

/// Type tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum NodeKind {
    Leaf,
    Sequence,
    Fallback,
}

impl NodeKind {
    /// Returns `true` for node kinds that own children.
    #[inline]
    pub fn is_composite(self) -> bool {
        !matches!(self, NodeKind::Leaf)
    }
}

/// A node of a behavior tree.
///
/// Composite logic lives in this crate and is dispatched here; leaf behavior
/// is open and supplied by the caller through [`Leaf`].
pub enum Node<C> {
    Leaf(Leaf<C>),
    Sequence(Sequence<C>),
    Fallback(Fallback<C>),
}

impl<C> Node<C> {
    /// Human-readable name, used for tracing only.
    pub fn name(&self) -> &str {
        match self {
            Node::Leaf(leaf) => leaf.name(),
            Node::Sequence(seq) => seq.name(),
            Node::Fallback(fallback) => fallback.name(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Leaf(_) => NodeKind::Leaf,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Fallback(_) => NodeKind::Fallback,
        }
    }

    /// Children in tick order. Leaves have none.
    pub fn children(&self) -> &[Node<C>] {
        match self {
            Node::Leaf(_) => &[],
            Node::Sequence(seq) => seq.children(),
            Node::Fallback(fallback) => fallback.children(),
        }
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}

impl<C> Behavior<C> for Node<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let status = match self {
            Node::Leaf(leaf) => leaf.tick(ctx),
            Node::Sequence(seq) => seq.tick(ctx),
            Node::Fallback(fallback) => fallback.tick(ctx),
        };
        tracing::trace!(node = %self.name(), kind = %self.kind(), %status, "ticked");
        status
    }

    fn halt(&mut self) {
        match self {
            Node::Leaf(leaf) => leaf.halt(),
            Node::Sequence(seq) => seq.halt(),
            Node::Fallback(fallback) => fallback.halt(),
        }
    }
}

impl<C> From<Leaf<C>> for Node<C> {
    fn from(leaf: Leaf<C>) -> Self {
        Node::Leaf(leaf)
    }
}

impl<C> From<Sequence<C>> for Node<C> {
    fn from(seq: Sequence<C>) -> Self {
        Node::Sequence(seq)
    }
}

impl<C> From<Fallback<C>> for Node<C> {
    fn from(fallback: Fallback<C>) -> Self {
        Node::Fallback(fallback)
    }
}
