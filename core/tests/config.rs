//! Loading level configuration from JSON.

use paradise_core::{types::Direction, LevelComposer, LevelConfig};
use std::path::PathBuf;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("paradise-{}-{name}", std::process::id()));
    std::fs::write(&path, content).expect("write temp config");
    path
}

#[test]
fn loads_overrides_and_keeps_defaults() {
    let path = write_temp(
        "override.json",
        r#"{ "width": 48, "height": 46, "max_steps": 500,
             "agent_start": { "pos": { "x": 5, "y": 5 }, "dir": "north" } }"#,
    );
    let config = LevelConfig::load(path.to_str().unwrap()).unwrap();
    assert_eq!((config.width, config.height), (48, 46));
    assert_eq!(config.word, "PARADISE");
    assert_eq!(config.effective_max_steps(), 500);
    assert_eq!(config.agent_start.unwrap().dir, Direction::North);

    let level = LevelComposer::new(config).compose().unwrap();
    assert_eq!(level.max_steps, 500);
    assert_eq!(level.grid.width(), 48);
    std::fs::remove_file(path).ok();
}

#[test]
fn missing_file_reports_its_path() {
    let err = LevelConfig::load("/nonexistent/level.json").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/level.json"));
}

#[test]
fn malformed_json_is_an_error() {
    let path = write_temp("bad.json", "{ width: ");
    assert!(LevelConfig::load(path.to_str().unwrap()).is_err());
    std::fs::remove_file(path).ok();
}
