//! paradise-core: generator for the fixed PARADISE grid-world level.
//!
//! The composer renders the word as wall glyphs, lays a hazard lane under
//! it, places keys and a goal, walls the goal off with lava behind a
//! locked door, and poses the agent. The result is an immutable grid plus
//! everything a runtime needs to reset an episode.

pub mod composer;
pub mod config;
pub mod error;
pub mod event;
pub mod glyph;
pub mod grid;
pub mod layout;
pub mod placement;
pub mod reachability;
pub mod render;
pub mod rng;
pub mod snapshot;
pub mod types;

pub use composer::{generate, Level, LevelComposer};
pub use config::{AgentPose, LevelConfig};
pub use error::{LevelError, LevelResult};
pub use grid::{Grid, GridBuilder, Tile};
