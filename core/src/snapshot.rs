//! Snapshot serialization: the finished level as handed to the runtime.
//!
//! A snapshot captures everything the runtime's reset needs: dimensions,
//! the rendered grid, every placed object, the agent pose, the mission
//! and the step budget.

use crate::{
    composer::Level,
    config::AgentPose,
    error::LevelResult,
    grid::Tile,
    render::render_rows,
    types::{Coord, Pos},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub pos: Pos,
    pub tile: Tile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub width: Coord,
    pub height: Coord,
    /// Tiles only; the agent is carried separately in `agent`.
    pub rows: Vec<String>,
    /// Doors, keys and goals in row-major order.
    pub objects: Vec<PlacedObject>,
    pub agent: AgentPose,
    pub mission: String,
    pub max_steps: u32,
}

impl LevelSnapshot {
    pub fn capture(level: &Level) -> Self {
        let grid = &level.grid;
        let objects = grid
            .positions_of(|t| matches!(t, Tile::Door { .. } | Tile::Key { .. } | Tile::Goal))
            .into_iter()
            .filter_map(|pos| grid.at(pos).map(|tile| PlacedObject { pos, tile }))
            .collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            rows: render_rows(grid, None),
            objects,
            agent: level.agent,
            mission: level.mission.clone(),
            max_steps: level.max_steps,
        }
    }

    pub fn to_json(&self) -> LevelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> LevelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
