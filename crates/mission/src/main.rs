//! Mission binary.
//!
//! Composition root: loads configuration, sets up logging, builds the tree
//! from its description and ticks it against a fresh world.
//!
//! # Examples
//!
//! ```bash
//! # Embedded mission, room door closed
//! cargo run -p mission
//!
//! # Room door already open, print the tree first
//! cargo run -p mission -- --door-open --print-tree
//!
//! # Custom description
//! cargo run -p mission -- --tree my-mission.ron --main-tree Alt
//! ```

use anyhow::{Result, bail};
use clap::Parser;
use mission::{Args, MissionConfig, World, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration (environment, then flags)
    let config = MissionConfig::from_env().with_args(Args::parse());

    // 2. Setup logging
    let _guard = logging::setup_logging(config.log_level, config.log_dir.as_deref())?;

    tracing::info!("Starting mission");
    match &config.tree_path {
        Some(path) => tracing::info!("Tree description: {:?}", path),
        None => tracing::info!("Tree description: embedded"),
    }
    tracing::info!("Room door open: {}", config.room_door_open);

    // 3. Build the tree
    let mut tree = mission::build_tree(&config)?;
    tracing::info!(
        "Tree built: root {:?}, {} nodes, depth {}",
        tree.root().name(),
        tree.node_count(),
        tree.depth()
    );

    if config.print_tree {
        print!("{tree}");
    }

    // 4. Run it
    let mut world = World::new(config.room_door_open).with_echo(true);

    println!("--- STARTING BEHAVIOR TREE ---");
    let status = mission::run(&mut tree, &mut world, config.max_ticks);
    println!("--- FINISHED ---");
    println!("Final status: {status}");

    tracing::debug!("Mission ran for {} ticks", tree.tick_count());

    if !status.is_success() {
        bail!("mission ended with {status}");
    }

    Ok(())
}
