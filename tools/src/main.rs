//! level-runner: builds the PARADISE level and prints it.
//!
//! Usage:
//!   level-runner
//!   level-runner --size 48 --random-start --seed 7
//!   level-runner --config level.json --json

use anyhow::Result;
use paradise_core::{
    event::BuildEvent,
    render::render_ascii,
    snapshot::LevelSnapshot,
    Level, LevelComposer, LevelConfig,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let random_start = args.iter().any(|a| a == "--random-start");
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str());

    let composer = match config_path {
        Some(path) => LevelComposer::from_file(path)?,
        None => {
            let defaults = LevelConfig::default();
            let size = parse_arg(&args, "--size", defaults.width);
            let mut config = LevelConfig {
                width: parse_arg(&args, "--width", size),
                height: parse_arg(&args, "--height", size),
                placement_seed: parse_arg(&args, "--seed", defaults.placement_seed),
                ..defaults
            };
            if random_start {
                config.agent_start = None;
            }
            LevelComposer::new(config)
        }
    };

    let level = composer.compose()?;
    log::debug!("{} build events recorded", level.events.len());

    if json {
        println!("{}", LevelSnapshot::capture(&level).to_json()?);
    } else {
        print_summary(&level);
    }
    Ok(())
}

fn print_summary(level: &Level) {
    let overwrites = level
        .events
        .iter()
        .filter(|e| matches!(e, BuildEvent::TileOverwritten { .. }))
        .count();

    println!("=== PARADISE ===");
    println!("  size:       {}x{}", level.grid.width(), level.grid.height());
    println!("  mission:    {}", level.mission);
    println!(
        "  agent:      ({}, {}) facing {:?}",
        level.agent.pos.x,
        level.agent.pos.y,
        level.agent.dir
    );
    println!("  max steps:  {}", level.max_steps);
    println!("  overwrites: {overwrites}");
    println!();
    print!("{}", render_ascii(&level.grid, Some(level.agent)));
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
