//! Action nodes for the mission tree.
//!
//! Each action finishes within a single tick. Actions whose preconditions do
//! not hold report `Failure` and log why; the tree decides what happens next.

use behavior_tree::{Behavior, Status};

use crate::world::{Door, Location, World};

/// Walks to a fixed location.
pub struct MoveTo {
    pub destination: Location,
}

impl Behavior<World> for MoveTo {
    fn tick(&mut self, world: &mut World) -> Status {
        let line = match self.destination {
            Location::RoomDoor => "[ ACTION ] Moving towards the room door...",
            Location::Fridge => "[ ACTION ] Moving towards the fridge.",
            Location::Exit => "[ ACTION ] Moving to room exit.",
            other => {
                tracing::debug!("Moving to {}", other);
                "[ ACTION ] Moving."
            }
        };
        world.report(line);
        world.location = self.destination;
        Status::Success
    }
}

/// Steps through the room door. Fails while the door is closed.
pub struct EnterRoom;

impl Behavior<World> for EnterRoom {
    fn tick(&mut self, world: &mut World) -> Status {
        if !world.is_open(Door::Room) {
            tracing::warn!("Cannot enter the room: the door is closed");
            return Status::Failure;
        }
        world.report("[ ACTION ] Entering the room.");
        world.location = Location::InsideRoom;
        Status::Success
    }
}

/// Opens a door.
pub struct OpenDoor {
    pub door: Door,
}

impl Behavior<World> for OpenDoor {
    fn tick(&mut self, world: &mut World) -> Status {
        world.report(format!("[ ACTION ] Opening the {} door.", self.door));
        world.set_open(self.door, true);
        Status::Success
    }
}

/// Looks for the apple. Fails unless the fridge is open.
pub struct FindApple;

impl Behavior<World> for FindApple {
    fn tick(&mut self, world: &mut World) -> Status {
        if !world.is_open(Door::Fridge) {
            tracing::warn!("Cannot find the apple: the fridge is closed");
            return Status::Failure;
        }
        world.report("[ ACTION ] Finding the apple inside.");
        world.apple_located = true;
        Status::Success
    }
}

/// Takes the apple. Fails unless it has been found.
pub struct PickApple;

impl Behavior<World> for PickApple {
    fn tick(&mut self, world: &mut World) -> Status {
        if !world.apple_located {
            tracing::warn!("Cannot pick the apple: it has not been found");
            return Status::Failure;
        }
        world.report("[ ACTION ] Picking the apple.");
        world.holding_apple = true;
        Status::Success
    }
}

/// Closes the fridge door.
pub struct CloseFridge;

impl Behavior<World> for CloseFridge {
    fn tick(&mut self, world: &mut World) -> Status {
        world.report("[ ACTION ] Closing the fridge door.");
        world.set_open(Door::Fridge, false);
        Status::Success
    }
}

/// Leaves the room.
pub struct ExitRoom;

impl Behavior<World> for ExitRoom {
    fn tick(&mut self, world: &mut World) -> Status {
        world.report("[ ACTION ] Exiting the room. Task Complete.");
        world.location = Location::Outside;
        Status::Success
    }
}
