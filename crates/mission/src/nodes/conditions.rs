//! Condition nodes for the mission tree.
//!
//! Condition nodes check the world and return Success or Failure.
//! They do not modify anything besides reporting what they saw.

use behavior_tree::{Behavior, Status};

use crate::world::{Door, World};

/// Checks whether a door is open.
///
/// # Example
///
/// ```rust,ignore
/// // Open the door only if it is closed
/// Fallback::new("EnsureRoomDoorOpen", vec![
///     leaf("IsDoorOpen", IsDoorOpen { door: Door::Room }),
///     leaf("OpenDoor", OpenDoor { door: Door::Room }),
/// ])
/// ```
pub struct IsDoorOpen {
    pub door: Door,
}

impl Behavior<World> for IsDoorOpen {
    fn tick(&mut self, world: &mut World) -> Status {
        let open = world.is_open(self.door);
        let answer = if open { "YES (Door is open)" } else { "NO (Door is closed)" };
        world.report(format!("[ CHECK  ] Is {} door open? -> {}.", self.door, answer));
        Status::from(open)
    }
}
