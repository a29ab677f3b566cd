//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the two building blocks for decision trees:
//! [`Sequence`] (AND logic) and [`Fallback`] (OR logic).
//!
//! Both keep a cursor: the index of the child that reported `Running` on the
//! previous tick. The next tick resumes at that child instead of re-running
//! siblings that already completed. Any completed pass (Success or Failure)
//! resets the cursor to zero.

use crate::error::{Result, StructuralError};
use crate::{Behavior, Node, Status};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence returns `Running` and resumes at that child next tick
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    name: String,
    children: Vec<Node<C>>,
    cursor: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child nodes.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::EmptyComposite`] if `children` is empty.
    pub fn new(name: impl Into<String>, children: Vec<Node<C>>) -> Result<Self> {
        let name = name.into();
        if children.is_empty() {
            return Err(StructuralError::EmptyComposite { name }.into());
        }
        Ok(Self {
            name,
            children,
            cursor: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }

    /// Index of the child the next tick starts from.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.cursor > 0 {
            tracing::trace!(sequence = %self.name, child = self.cursor, "resuming");
        }

        while let Some(child) = self.children.get_mut(self.cursor) {
            match child.tick(ctx) {
                Status::Success => self.cursor += 1,
                Status::Failure => {
                    self.cursor = 0;
                    return Status::Failure; // Short-circuit
                }
                Status::Running => return Status::Running, // Resume here next tick
            }
        }

        // All children succeeded
        self.cursor = 0;
        Status::Success
    }

    fn halt(&mut self) {
        self.cursor = 0;
        for child in &mut self.children {
            child.halt();
        }
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// Also known as a *selector*. Used to express "ensure a precondition, else
/// perform the corrective action": `Fallback[IsDoorOpen, OpenDoor]`.
///
/// # Semantics
///
/// A `Fallback` node evaluates its children from left to right:
/// - If a child returns `Success`, the fallback **stops immediately** and returns `Success`
/// - If a child returns `Running`, the fallback returns `Running` and resumes at that child next tick
/// - If a child returns `Failure`, the fallback **continues** to the next child
/// - If all children return `Failure`, the fallback returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Fallback<C> {
    name: String,
    children: Vec<Node<C>>,
    cursor: usize,
}

impl<C> Fallback<C> {
    /// Creates a new fallback with the given child nodes.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::EmptyComposite`] if `children` is empty.
    pub fn new(name: impl Into<String>, children: Vec<Node<C>>) -> Result<Self> {
        let name = name.into();
        if children.is_empty() {
            return Err(StructuralError::EmptyComposite { name }.into());
        }
        Ok(Self {
            name,
            children,
            cursor: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node<C>] {
        &self.children
    }

    /// Index of the child the next tick starts from.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<C> Behavior<C> for Fallback<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        if self.cursor > 0 {
            tracing::trace!(fallback = %self.name, child = self.cursor, "resuming");
        }

        while let Some(child) = self.children.get_mut(self.cursor) {
            match child.tick(ctx) {
                Status::Failure => self.cursor += 1, // Try next child
                Status::Success => {
                    self.cursor = 0;
                    return Status::Success; // Short-circuit
                }
                Status::Running => return Status::Running,
            }
        }

        // All children failed
        self.cursor = 0;
        Status::Failure
    }

    fn halt(&mut self) {
        self.cursor = 0;
        for child in &mut self.children {
            child.halt();
        }
    }
}
