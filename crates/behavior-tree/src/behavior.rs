//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the capability shared
//! by every node in a tree. The trait is generic over a context type `C`
//! owned by the caller; leaves read it (conditions) or change it (actions).

use crate::Status;

/// A behavior tree node that can be ticked against a context.
pub trait Behavior<C>: Send {
    /// Tick this node once against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the caller's context. Conditions only
    ///   read it; actions may change it.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior needs another tick to finish
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Abandon any in-progress work and return to the initial state.
    ///
    /// Stateless leaves have nothing to reset, so the default does nothing.
    fn halt(&mut self) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }

    #[inline]
    fn halt(&mut self) {
        (**self).halt()
    }
}
