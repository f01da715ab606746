//! The build log: an ordered record of what each pipeline stage did.
//!
//! RULE: every overwrite of a non-empty tile is recorded here.
//! Layering is allowed; silent corruption is not.

use crate::{
    grid::Tile,
    types::{Coord, Direction, Pos},
};
use serde::{Deserialize, Serialize};

/// Pipeline stages in execution order.
/// NEVER reorder: later stages intentionally overwrite earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStage {
    Allocate,
    Boundary,
    Word,
    HazardLane,
    Keys,
    Goal,
    Barrier,
    Agent,
}

impl BuildStage {
    pub const ORDER: [BuildStage; 8] = [
        BuildStage::Allocate,
        BuildStage::Boundary,
        BuildStage::Word,
        BuildStage::HazardLane,
        BuildStage::Keys,
        BuildStage::Goal,
        BuildStage::Barrier,
        BuildStage::Agent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Allocate => "allocate",
            Self::Boundary => "boundary",
            Self::Word => "word",
            Self::HazardLane => "hazard_lane",
            Self::Keys => "keys",
            Self::Goal => "goal",
            Self::Barrier => "barrier",
            Self::Agent => "agent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BuildEvent {
    StageCompleted {
        stage: BuildStage,
        writes: usize,
    },
    TileOverwritten {
        stage: BuildStage,
        x: Coord,
        y: Coord,
        previous: Tile,
        next: Tile,
    },
    AgentPlaced {
        pos: Pos,
        dir: Direction,
        configured: bool,
    },
}
