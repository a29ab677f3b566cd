//! Mission-specific behavior tree nodes.
//!
//! This module contains the leaves the mission tree is made of. Nodes are
//! divided into:
//!
//! - `conditions`: Nodes that check the world (return Success/Failure)
//! - `actions`: Nodes that move the robot and change the world

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;

use behavior_tree::{Behavior, NodeConfig, Registry, Result};

use crate::world::{Door, Location, World};

/// Attribute naming the door a door node acts on.
pub const DOOR_ATTRIBUTE: &str = "door";

/// Registers every mission node type.
pub fn register_mission_nodes(registry: &mut Registry<World>) -> Result<()> {
    registry.register("MoveToRoomDoor", |_, _| {
        Ok(boxed(MoveTo {
            destination: Location::RoomDoor,
        }))
    })?;
    registry.register("MoveToFridge", |_, _| {
        Ok(boxed(MoveTo {
            destination: Location::Fridge,
        }))
    })?;
    registry.register("MoveToExit", |_, _| {
        Ok(boxed(MoveTo {
            destination: Location::Exit,
        }))
    })?;
    registry.register("EnterRoom", |_, _| Ok(boxed(EnterRoom)))?;
    registry.register("FindApple", |_, _| Ok(boxed(FindApple)))?;
    registry.register("PickApple", |_, _| Ok(boxed(PickApple)))?;
    registry.register("CloseFridge", |_, _| Ok(boxed(CloseFridge)))?;
    registry.register("ExitRoom", |_, _| Ok(boxed(ExitRoom)))?;

    registry.register("IsDoorOpen", |_, config| {
        Ok(boxed(IsDoorOpen {
            door: door(config)?,
        }))
    })?;
    registry.register("OpenDoor", |_, config| {
        Ok(boxed(OpenDoor {
            door: door(config)?,
        }))
    })?;

    Ok(())
}

fn door(config: &NodeConfig) -> Result<Door> {
    config.require_parsed(DOOR_ATTRIBUTE)
}

fn boxed<B: Behavior<World> + 'static>(behavior: B) -> Box<dyn Behavior<World>> {
    Box::new(behavior)
}
