use crate::{
    error::{LevelError, LevelResult},
    glyph::Glyph,
    layout::{
        DEFAULT_AGENT_DIR, DEFAULT_AGENT_START, DEFAULT_ANCHOR_COLUMNS, DEFAULT_BASELINE_ROW,
        DEFAULT_SIZE, DEFAULT_WORD, MAX_GRID_SIDE,
    },
    types::{Coord, Direction, Pos},
};
use serde::{Deserialize, Serialize};

/// The agent's initial position and facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPose {
    pub pos: Pos,
    pub dir: Direction,
}

/// Construction-time configuration of the level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub width: Coord,
    pub height: Coord,
    pub word: String,
    pub baseline_row: Coord,
    pub anchor_columns: Vec<Coord>,
    /// `None` hands the agent to the free-cell placer.
    pub agent_start: Option<AgentPose>,
    /// `None` derives the step budget from the grid area.
    pub max_steps: Option<u32>,
    /// Seed for the free-cell placer. Unused when `agent_start` is set.
    pub placement_seed: u64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            word: DEFAULT_WORD.to_string(),
            baseline_row: DEFAULT_BASELINE_ROW,
            anchor_columns: DEFAULT_ANCHOR_COLUMNS.to_vec(),
            agent_start: Some(AgentPose {
                pos: DEFAULT_AGENT_START,
                dir: DEFAULT_AGENT_DIR,
            }),
            max_steps: None,
            placement_seed: 42,
        }
    }
}

impl LevelConfig {
    /// Square grid of side `size`, everything else default.
    pub fn with_size(size: Coord) -> Self {
        Self {
            width: size,
            height: size,
            ..Self::default()
        }
    }

    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: LevelConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::debug!("Loaded level config from {path}");
        Ok(config)
    }

    /// Structural checks that need no grid: dimensions, alphabet and
    /// word/anchor agreement. Coordinates are checked by the composer.
    pub fn validate(&self) -> LevelResult<Vec<Glyph>> {
        let side = 3..=MAX_GRID_SIDE;
        if !side.contains(&self.width) || !side.contains(&self.height) {
            return Err(LevelError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let glyphs = Glyph::parse_word(&self.word)?;
        if glyphs.len() != self.anchor_columns.len() {
            return Err(LevelError::AnchorCountMismatch {
                letters: glyphs.len(),
                anchors: self.anchor_columns.len(),
            });
        }
        Ok(glyphs)
    }

    /// Step budget handed to the runtime: configured, or 4 x area.
    pub fn effective_max_steps(&self) -> u32 {
        self.max_steps.unwrap_or_else(|| {
            let side = |v: Coord| u64::try_from(v).unwrap_or(0);
            let budget = side(self.width)
                .saturating_mul(side(self.height))
                .saturating_mul(4);
            u32::try_from(budget).unwrap_or(u32::MAX)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_paradise_layout() {
        let c = LevelConfig::default();
        assert_eq!((c.width, c.height), (44, 44));
        assert_eq!(c.word, "PARADISE");
        assert_eq!(c.anchor_columns, vec![3, 8, 13, 18, 23, 28, 31, 36]);
        assert_eq!(c.agent_start.map(|a| a.pos), Some(Pos::new(18, 6)));
        assert_eq!(c.validate().unwrap().len(), 8);
    }

    #[test]
    fn max_steps_derives_from_area_when_unset() {
        let mut c = LevelConfig::default();
        assert_eq!(c.effective_max_steps(), 4 * 44 * 44);
        c.max_steps = Some(100);
        assert_eq!(c.effective_max_steps(), 100);
    }

    #[test]
    fn max_steps_saturates_instead_of_overflowing() {
        assert_eq!(LevelConfig::with_size(50_000).effective_max_steps(), u32::MAX);
        assert_eq!(LevelConfig::with_size(-5).effective_max_steps(), 0);
    }

    #[test]
    fn side_above_the_cap_is_invalid() {
        assert!(LevelConfig::with_size(MAX_GRID_SIDE).validate().is_ok());
        assert!(matches!(
            LevelConfig::with_size(MAX_GRID_SIDE + 1).validate(),
            Err(LevelError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn anchor_count_must_match_word() {
        let c = LevelConfig {
            anchor_columns: vec![3, 8],
            ..LevelConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(LevelError::AnchorCountMismatch { letters: 8, anchors: 2 })
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c: LevelConfig = serde_json::from_str(r#"{"width": 50, "agent_start": null}"#).unwrap();
        assert_eq!(c.width, 50);
        assert_eq!(c.height, 44);
        assert!(c.agent_start.is_none());
    }
}
