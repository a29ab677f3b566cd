//! The executable tree and its single tick entry point.

use std::fmt;

use crate::{Behavior, Node, Status};

/// A built behavior tree.
///
/// Owns exactly one root node. [`Tree::tick_root`] performs one full pass and
/// never loops; callers that want to drive a `Running` tree to completion tick
/// it again on their own schedule.
///
/// `tick_root` takes `&mut self`, so one tree can never be ticked from two
/// places at once. Use independent trees for independent agents.
pub struct Tree<C> {
    root: Node<C>,
    ticks: u64,
}

impl<C> Tree<C> {
    pub fn new(root: Node<C>) -> Self {
        Self { root, ticks: 0 }
    }

    /// Runs one top-to-bottom tick pass and returns the root's status.
    pub fn tick_root(&mut self, ctx: &mut C) -> Status {
        self.ticks += 1;
        let span = tracing::debug_span!("tick_root", tick = self.ticks, root = %self.root.name());
        let _enter = span.enter();

        let status = self.root.tick(ctx);
        tracing::debug!(%status, "tick pass finished");
        status
    }

    /// Resets every composite cursor so the next tick starts from scratch.
    pub fn halt(&mut self) {
        tracing::debug!(root = %self.root.name(), "halting tree");
        self.root.halt();
    }

    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    /// Number of `tick_root` calls made so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

impl<C> fmt::Display for Tree<C> {
    /// Indented outline of the tree, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node<C>(f: &mut fmt::Formatter<'_>, node: &Node<C>, indent: usize) -> fmt::Result {
            writeln!(f, "{:indent$}{} ({})", "", node.name(), node.kind(), indent = indent * 2)?;
            for child in node.children() {
                write_node(f, child, indent + 1)?;
            }
            Ok(())
        }

        write_node(f, &self.root, 0)
    }
}

impl<C> fmt::Debug for Tree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root.name())
            .field("nodes", &self.node_count())
            .field("ticks", &self.ticks)
            .finish()
    }
}
