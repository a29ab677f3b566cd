//! Leaf behavior nodes.
//!
//! Leaves do the actual work of a tree. There are two flavors, sharing the
//! same contract and the same type:
//!
//! - **Conditions** check the context and return Success/Failure. They should
//!   not modify state.
//! - **Actions** perform side effects and report how it went.
//!
//! The distinction is documentation only; the engine never observes anything
//! about a leaf except the [`Status`] it returns.

use std::fmt;

use crate::{Behavior, Status};

/// A named leaf wrapping any user-supplied [`Behavior`].
pub struct Leaf<C> {
    name: String,
    behavior: Box<dyn Behavior<C>>,
}

impl<C> Leaf<C> {
    pub fn new(name: impl Into<String>, behavior: Box<dyn Behavior<C>>) -> Self {
        Self {
            name: name.into(),
            behavior,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<C> Behavior<C> for Leaf<C> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        self.behavior.tick(ctx)
    }

    #[inline]
    fn halt(&mut self) {
        self.behavior.halt()
    }
}

impl<C> fmt::Debug for Leaf<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf").field("name", &self.name).finish_non_exhaustive()
    }
}

/// An action backed by a closure.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Behavior, Status};
///
/// let mut open_door = Action::new(|opened: &mut bool| {
///     *opened = true;
///     Status::Success
/// });
///
/// let mut opened = false;
/// assert_eq!(open_door.tick(&mut opened), Status::Success);
/// assert!(opened);
/// ```
pub struct Action<F> {
    run: F,
}

impl<F> Action<F> {
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: FnMut(&mut C) -> Status + Send,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}

/// A read-only check backed by a predicate.
///
/// `true` maps to `Success`, `false` to `Failure`. A condition never reports
/// `Running`.
pub struct Condition<F> {
    check: F,
}

impl<F> Condition<F> {
    pub fn new(check: F) -> Self {
        Self { check }
    }
}

impl<C, F> Behavior<C> for Condition<F>
where
    F: Fn(&C) -> bool + Send,
{
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        Status::from((self.check)(ctx))
    }
}

/// Leaf that succeeds without doing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSuccess;

impl<C> Behavior<C> for AlwaysSuccess {
    #[inline]
    fn tick(&mut self, _ctx: &mut C) -> Status {
        Status::Success
    }
}

/// Leaf that fails without doing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFailure;

impl<C> Behavior<C> for AlwaysFailure {
    #[inline]
    fn tick(&mut self, _ctx: &mut C) -> Status {
        Status::Failure
    }
}
