//! Fetch-an-apple mission driven by a behavior tree.
//!
//! The robot walks to a room, makes sure the door is open, fetches an apple
//! from the fridge (making sure the fridge is open first) and leaves. The
//! tree shape lives in `data/mission.ron`; the leaves live in [`nodes`].

pub mod config;
pub mod logging;
pub mod nodes;
pub mod world;

use anyhow::{Context, Result};
use behavior_tree::{Registry, Status, Tree, TreeBuilder, TreeDescription};

pub use config::{Args, MissionConfig};
pub use world::{Door, Location, World};

/// The embedded mission description.
pub const MISSION_TREE: &str = include_str!("../data/mission.ron");

/// Builds the mission tree described by `config`.
pub fn build_tree(config: &MissionConfig) -> Result<Tree<World>> {
    let mut registry = Registry::new();
    nodes::register_mission_nodes(&mut registry).context("failed to register mission nodes")?;

    let description = match &config.tree_path {
        Some(path) => TreeDescription::from_path(path)
            .with_context(|| format!("failed to load tree description {:?}", path))?,
        None => TreeDescription::from_ron(MISSION_TREE)
            .context("embedded mission description is invalid")?,
    };

    let mut builder = TreeBuilder::new(&registry);
    if let Some(id) = &config.main_tree {
        builder = builder.main_tree(id.as_str());
    }

    let tree = builder
        .build(&description)
        .context("failed to build the mission tree")?;
    Ok(tree)
}

/// Ticks `tree` until it completes or `max_ticks` passes have been made.
///
/// A tree still running after the last pass is halted and `Running` is
/// returned.
pub fn run(tree: &mut Tree<World>, world: &mut World, max_ticks: u32) -> Status {
    for _ in 0..max_ticks {
        let status = tree.tick_root(world);
        if status.is_completed() {
            return status;
        }
    }

    tracing::warn!(
        "Mission still running after {} ticks; halting the tree",
        max_ticks
    );
    tree.halt();
    Status::Running
}
