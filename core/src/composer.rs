//! The level composer: synthesizes the fixed PARADISE level.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Allocate     empty width x height grid
//!   2. Boundary     one-cell wall perimeter
//!   3. Word         one glyph per letter along the baseline
//!   4. HazardLane   one lava under each anchor column
//!   5. Keys         three decorative keys
//!   6. Goal         the goal tile
//!   7. Barrier      lava pocket around the goal, then the locked door
//!   8. Agent        configured pose, or free-cell placement
//!
//! RULES:
//!   - Every fixed coordinate is validated before the first write.
//!   - Later stages may overwrite earlier ones; each overwrite of a
//!     non-empty tile is recorded in the build log.
//!   - The gated-goal invariants are checked once the agent is placed.

use crate::{
    config::{AgentPose, LevelConfig},
    error::{LevelError, LevelResult},
    event::{BuildEvent, BuildStage},
    glyph::{check_footprint, draw_letter, Glyph},
    grid::{Grid, GridBuilder, Tile},
    layout::{barrier_cells, door_tile, hazard_row, DOOR, GOAL, KEYS, MISSION},
    placement::place_agent,
    reachability::verify_gated_goal,
    rng::PlacementRng,
    types::{Coord, Pos},
};

/// A finished level, ready for the runtime's reset.
#[derive(Debug, Clone)]
pub struct Level {
    pub grid: Grid,
    pub agent: AgentPose,
    pub mission: String,
    pub max_steps: u32,
    pub events: Vec<BuildEvent>,
}

/// Mutable state threaded through the pipeline.
struct BuildState {
    builder: GridBuilder,
    events: Vec<BuildEvent>,
    stage: BuildStage,
    writes: usize,
    agent: Option<AgentPose>,
}

impl BuildState {
    fn new(builder: GridBuilder) -> Self {
        Self {
            builder,
            events: Vec::new(),
            stage: BuildStage::Allocate,
            writes: 0,
            agent: None,
        }
    }

    /// Write one tile, recording any change to a non-empty cell.
    fn put(&mut self, pos: Pos, tile: Tile) -> LevelResult<()> {
        let previous = self.builder.set(pos.x, pos.y, tile)?;
        self.writes += 1;
        if !previous.is_empty() && previous != tile {
            log::debug!(
                "{}: ({}, {}) {} -> {}",
                self.stage.name(),
                pos.x,
                pos.y,
                previous.name(),
                tile.name()
            );
            self.events.push(BuildEvent::TileOverwritten {
                stage: self.stage,
                x: pos.x,
                y: pos.y,
                previous,
                next: tile,
            });
        }
        Ok(())
    }

    fn finish_stage(&mut self) {
        log::debug!("Stage {} done ({} writes)", self.stage.name(), self.writes);
        self.events.push(BuildEvent::StageCompleted {
            stage: self.stage,
            writes: self.writes,
        });
        self.writes = 0;
    }
}

pub struct LevelComposer {
    config: LevelConfig,
}

impl LevelComposer {
    pub fn new(config: LevelConfig) -> Self {
        Self { config }
    }

    /// Composer for a JSON config file.
    pub fn from_file(path: &str) -> LevelResult<Self> {
        Ok(Self::new(LevelConfig::load(path)?))
    }

    /// Run the full pipeline. Deterministic: the same configuration always
    /// yields the same level, or the same error.
    pub fn compose(&self) -> LevelResult<Level> {
        let cfg = &self.config;
        log::info!("Composing {}x{} level '{}'", cfg.width, cfg.height, cfg.word);
        let glyphs = cfg.validate()?;
        self.validate_layout(&glyphs)?;

        let mut state = BuildState::new(GridBuilder::new(cfg.width, cfg.height)?);
        state.finish_stage();

        for stage in &BuildStage::ORDER[1..] {
            state.stage = *stage;
            self.run_stage(&mut state, &glyphs)?;
            state.finish_stage();
        }

        let agent = state
            .agent
            .ok_or_else(|| LevelError::GateViolation("agent stage did not run".into()))?;
        verify_gated_goal(state.builder.view(), agent.pos)?;

        let level = Level {
            grid: state.builder.freeze(),
            agent,
            mission: MISSION.to_string(),
            max_steps: cfg.effective_max_steps(),
            events: state.events,
        };
        log::info!(
            "Level ready: agent at ({}, {}) facing {:?}, max_steps {}",
            agent.pos.x,
            agent.pos.y,
            agent.dir,
            level.max_steps
        );
        Ok(level)
    }

    fn run_stage(&self, state: &mut BuildState, glyphs: &[Glyph]) -> LevelResult<()> {
        let cfg = &self.config;
        match state.stage {
            BuildStage::Allocate => {}
            BuildStage::Boundary => {
                state.builder.wall_rect(0, 0, cfg.width, cfg.height)?;
                state.writes += usize::try_from(2 * (cfg.width + cfg.height)).unwrap_or(0);
            }
            BuildStage::Word => {
                for (glyph, &x) in glyphs.iter().zip(&cfg.anchor_columns) {
                    state.writes += draw_letter(&mut state.builder, *glyph, x, cfg.baseline_row)?;
                }
            }
            BuildStage::HazardLane => {
                let y = self.hazard_lane_row()?;
                for &x in &cfg.anchor_columns {
                    state.put(Pos::new(x, y), Tile::Lava)?;
                }
            }
            BuildStage::Keys => {
                for (color, pos) in KEYS {
                    state.put(pos, Tile::Key { color })?;
                }
            }
            BuildStage::Goal => state.put(GOAL, Tile::Goal)?,
            BuildStage::Barrier => {
                for pos in barrier_cells() {
                    state.put(pos, Tile::Lava)?;
                }
                state.put(DOOR, door_tile())?;
            }
            BuildStage::Agent => {
                let pose = self.resolve_agent(state.builder.view())?;
                state.events.push(BuildEvent::AgentPlaced {
                    pos: pose.pos,
                    dir: pose.dir,
                    configured: cfg.agent_start.is_some(),
                });
                state.agent = Some(pose);
            }
        }
        Ok(())
    }

    fn resolve_agent(&self, grid: &Grid) -> LevelResult<AgentPose> {
        match self.config.agent_start {
            Some(pose) => {
                let tile = grid.at(pose.pos).unwrap_or(Tile::Wall);
                if !tile.is_empty() {
                    return Err(LevelError::OccupiedStart {
                        x: pose.pos.x,
                        y: pose.pos.y,
                        tile: tile.name(),
                    });
                }
                Ok(pose)
            }
            None => {
                log::warn!(
                    "No agent start configured; placing with seed {}",
                    self.config.placement_seed
                );
                let mut rng = PlacementRng::new(self.config.placement_seed);
                place_agent(grid, &mut rng)
            }
        }
    }

    /// Fail fast if any fixed coordinate would leave the interior.
    fn validate_layout(&self, glyphs: &[Glyph]) -> LevelResult<()> {
        let cfg = &self.config;
        let (w, h) = (cfg.width, cfg.height);

        for (glyph, &x) in glyphs.iter().zip(&cfg.anchor_columns) {
            check_footprint(*glyph, Pos::new(x, cfg.baseline_row), w, h)?;
        }

        let lane_y = self.hazard_lane_row()?;
        let mut fixed: Vec<(String, Pos)> = cfg
            .anchor_columns
            .iter()
            .map(|&x| ("hazard lane lava".to_string(), Pos::new(x, lane_y)))
            .collect();
        fixed.extend(KEYS.iter().map(|(c, p)| (format!("{} key", c.name()), *p)));
        fixed.push(("goal".into(), GOAL));
        fixed.extend(barrier_cells().into_iter().map(|p| ("barrier lava".to_string(), p)));
        fixed.push(("door".into(), DOOR));
        if let Some(pose) = cfg.agent_start {
            fixed.push(("agent start".into(), pose.pos));
        }

        for (what, pos) in fixed {
            check_interior(what, pos, w, h)?;
        }
        Ok(())
    }

    fn hazard_lane_row(&self) -> LevelResult<Coord> {
        let cfg = &self.config;
        hazard_row(cfg.baseline_row).ok_or_else(|| LevelError::OutOfBounds {
            what: "hazard lane".into(),
            x: cfg.anchor_columns.first().copied().unwrap_or(0),
            y: cfg.baseline_row,
            width: cfg.width,
            height: cfg.height,
        })
    }
}

fn check_interior(what: String, pos: Pos, width: Coord, height: Coord) -> LevelResult<()> {
    if pos.x < 1 || pos.x > width - 2 || pos.y < 1 || pos.y > height - 2 {
        return Err(LevelError::OutOfBounds {
            what,
            x: pos.x,
            y: pos.y,
            width,
            height,
        });
    }
    Ok(())
}

/// Build the level grid for the given dimensions, word and anchors, with
/// every other setting at its default.
pub fn generate(
    width: Coord,
    height: Coord,
    word: &str,
    baseline_row: Coord,
    anchor_columns: &[Coord],
) -> LevelResult<Grid> {
    let config = LevelConfig {
        width,
        height,
        word: word.to_string(),
        baseline_row,
        anchor_columns: anchor_columns.to_vec(),
        ..LevelConfig::default()
    };
    LevelComposer::new(config).compose().map(|level| level.grid)
}
