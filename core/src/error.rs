use crate::types::Coord;
use thiserror::Error;

/// Every way level generation can fail. All of them are configuration
/// faults: the same configuration fails identically on every call.
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("{what} at ({x}, {y}) lies outside the interior of a {width}x{height} grid")]
    OutOfBounds {
        what: String,
        x: Coord,
        y: Coord,
        width: Coord,
        height: Coord,
    },

    #[error("Word has {letters} letters but {anchors} anchor columns were given")]
    AnchorCountMismatch { letters: usize, anchors: usize },

    #[error("No glyph defined for letter '{0}'")]
    UnsupportedGlyph(char),

    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: Coord, height: Coord },

    #[error("Agent start ({x}, {y}) is occupied by {tile}")]
    OccupiedStart { x: Coord, y: Coord, tile: &'static str },

    #[error("Barrier gate violated: {0}")]
    GateViolation(String),

    #[error("No free cell found for the agent after {tries} tries")]
    PlacementExhausted { tries: u32 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] anyhow::Error),
}

impl LevelError {
    /// True for faults caused by the configured layout itself
    /// (dimensions, anchors, fixed coordinates).
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. }
                | Self::AnchorCountMismatch { .. }
                | Self::UnsupportedGlyph(_)
                | Self::InvalidDimensions { .. }
                | Self::OccupiedStart { .. }
                | Self::Config(_)
        )
    }
}

pub type LevelResult<T> = Result<T, LevelError>;
