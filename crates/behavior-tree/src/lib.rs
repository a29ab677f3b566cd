//! Lightweight, synchronous behavior tree engine.
//!
//! Trees are built from leaves (actions and conditions supplied by the
//! caller) and two composites, [`Sequence`] and [`Fallback`], and driven one
//! tick at a time through [`Tree::tick_root`].
//!
//! - **Synchronous ticks**: a tick is one call stack from the root to the
//!   active leaf and back. Nothing suspends the calling thread.
//! - **Running is a value**: a node that needs more time returns
//!   [`Status::Running`]; composites remember where they stopped and resume
//!   there on the next tick.
//! - **Declarative trees**: a [`Registry`] maps type names to node factories
//!   and a [`TreeBuilder`] assembles a [`TreeDescription`] (RON or JSON) into
//!   a tree.
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - [`Node`]: Closed set of node variants (leaf, sequence, fallback)
//! - Composite nodes: [`Sequence`], [`Fallback`]
//! - Leaf helpers: [`Action`], [`Condition`], [`AlwaysSuccess`], [`AlwaysFailure`]
//! - [`Tree`]: Owns the root and runs tick passes
//! - [`Registry`], [`TreeBuilder`]: Build trees from [`TreeDescription`]s
//!
//! # Example
//!
//! ```rust
//! use behavior_tree::builder::{action, condition, fallback, sequence};
//! use behavior_tree::{Status, Tree};
//!
//! struct Room {
//!     door_open: bool,
//! }
//!
//! let root = sequence(
//!     "Enter",
//!     vec![
//!         fallback(
//!             "EnsureDoorOpen",
//!             vec![
//!                 condition("IsDoorOpen", |room: &Room| room.door_open),
//!                 action("OpenDoor", |room: &mut Room| {
//!                     room.door_open = true;
//!                     Status::Success
//!                 }),
//!             ],
//!         )?,
//!         action("EnterRoom", |_: &mut Room| Status::Success),
//!     ],
//! )?;
//!
//! let mut tree = Tree::new(root);
//! let mut room = Room { door_open: false };
//! assert_eq!(tree.tick_root(&mut room), Status::Success);
//! assert!(room.door_open);
//! # Ok::<(), behavior_tree::BuildError>(())
//! ```

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod description;
pub mod error;
pub mod leaf;
pub mod node;
pub mod registry;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use builder::TreeBuilder;
pub use composite::{Fallback, Sequence};
pub use description::{NodeDescription, TreeDefinition, TreeDescription};
pub use error::{BuildError, Result, StructuralError};
pub use leaf::{Action, AlwaysFailure, AlwaysSuccess, Condition, Leaf};
pub use node::{Node, NodeKind};
pub use registry::{LeafFactory, NodeConfig, Registry};
pub use status::Status;
pub use tree::Tree;
