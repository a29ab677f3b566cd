//! World state the mission nodes sense and change.
//!
//! Conditions poll this state on every tick; actions update it. Nothing in
//! the tree holds on to it between ticks.

/// A door the robot can check and open.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Door {
    Room,
    Fridge,
}

/// Where the robot currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Location {
    Start,
    RoomDoor,
    InsideRoom,
    Fridge,
    Exit,
    Outside,
}

/// The robot and its surroundings.
#[derive(Debug, Clone)]
pub struct World {
    pub location: Location,
    pub apple_located: bool,
    pub holding_apple: bool,
    room_door_open: bool,
    fridge_open: bool,
    journal: Vec<String>,
    echo: bool,
}

impl World {
    pub fn new(room_door_open: bool) -> Self {
        Self {
            location: Location::Start,
            apple_located: false,
            holding_apple: false,
            room_door_open,
            fridge_open: false,
            journal: Vec::new(),
            echo: false,
        }
    }

    /// Also print every reported line to stdout.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn is_open(&self, door: Door) -> bool {
        match door {
            Door::Room => self.room_door_open,
            Door::Fridge => self.fridge_open,
        }
    }

    pub fn set_open(&mut self, door: Door, open: bool) {
        match door {
            Door::Room => self.room_door_open = open,
            Door::Fridge => self.fridge_open = open,
        }
    }

    /// Records a line of mission output.
    pub fn report(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.echo {
            println!("{line}");
        }
        self.journal.push(line);
    }

    /// Every line reported so far.
    pub fn journal(&self) -> &[String] {
        &self.journal
    }
}
