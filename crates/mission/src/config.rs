//! Mission configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Command-line flags. Each one overrides its environment variable.
#[derive(Debug, Default, Parser)]
#[command(name = "mission")]
#[command(about = "Runs the fetch-an-apple behavior tree", long_about = None)]
#[command(version)]
pub struct Args {
    /// Tree description file (RON, or JSON with a .json extension)
    #[arg(long, value_name = "PATH")]
    pub tree: Option<PathBuf>,

    /// Build this tree instead of the description's main tree
    #[arg(long, value_name = "ID")]
    pub main_tree: Option<String>,

    /// Maximum number of ticks while the root keeps running
    #[arg(long, value_name = "N")]
    pub max_ticks: Option<u32>,

    /// Start with the room door already open
    #[arg(long)]
    pub door_open: bool,

    /// Print the tree outline before running it
    #[arg(long)]
    pub print_tree: bool,
}

/// Configuration required to run the mission.
#[derive(Clone, Debug)]
pub struct MissionConfig {
    pub tree_path: Option<PathBuf>,
    pub main_tree: Option<String>,
    pub max_ticks: u32,
    pub room_door_open: bool,
    pub print_tree: bool,
    pub log_level: Level,
    pub log_dir: Option<PathBuf>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            tree_path: None,
            main_tree: None,
            max_ticks: 16,
            room_door_open: false,
            print_tree: false,
            log_level: Level::INFO,
            log_dir: None,
        }
    }
}

impl MissionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MISSION_TREE_PATH` - Tree description file (default: embedded mission)
    /// - `MISSION_MAX_TICKS` - Tick cap while the root keeps running (default: 16)
    /// - `MISSION_DOOR_OPEN` - Start with the room door open: true/1/yes/on,
    ///   false/0/no/off, or empty for true (default: false)
    /// - `MISSION_LOG_LEVEL` - Default tracing level (default: info)
    /// - `MISSION_LOG_DIR` - Also write logs to `mission.log` in this directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.tree_path = env::var("MISSION_TREE_PATH").ok().map(PathBuf::from);

        if let Some(ticks) = read_env::<u32>("MISSION_MAX_TICKS") {
            config.max_ticks = ticks.max(1);
        }

        if let Some(open) = read_env_bool("MISSION_DOOR_OPEN") {
            config.room_door_open = open;
        }

        if let Some(level) = read_env::<Level>("MISSION_LOG_LEVEL") {
            config.log_level = level;
        }

        config.log_dir = env::var("MISSION_LOG_DIR").ok().map(PathBuf::from);

        config
    }

    /// Applies command-line overrides.
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(path) = args.tree {
            self.tree_path = Some(path);
        }
        if let Some(id) = args.main_tree {
            self.main_tree = Some(id);
        }
        if let Some(ticks) = args.max_ticks {
            self.max_ticks = ticks.max(1);
        }
        self.room_door_open |= args.door_open;
        self.print_tree |= args.print_tree;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_flag(&env::var(key).ok()?)
}

/// A set-but-empty variable counts as `true`; unrecognized values are ignored.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
