//! The hand-authored layout: every fixed coordinate of the level.

use crate::{
    grid::Tile,
    types::{Color, Coord, Direction, Pos},
};

pub const DEFAULT_SIZE: Coord = 44;
pub const DEFAULT_WORD: &str = "PARADISE";
pub const DEFAULT_BASELINE_ROW: Coord = 20;
pub const DEFAULT_ANCHOR_COLUMNS: [Coord; 8] = [3, 8, 13, 18, 23, 28, 31, 36];

/// Largest accepted grid side. Keeps the cell count and the derived step
/// budget well inside their integer types.
pub const MAX_GRID_SIDE: Coord = 1024;

/// The hazard lane sits this many rows below the word's baseline.
pub const HAZARD_LANE_OFFSET: Coord = 6;

pub const DEFAULT_AGENT_START: Pos = Pos::new(18, 6);
pub const DEFAULT_AGENT_DIR: Direction = Direction::East;

pub const MISSION: &str = "grand mission";

/// Decorative keys, placed in this order.
pub const KEYS: [(Color, Pos); 3] = [
    (Color::Yellow, Pos::new(20, 6)),
    (Color::Blue, Pos::new(20, 15)),
    (Color::Purple, Pos::new(35, 12)),
];

pub const GOAL: Pos = Pos::new(25, 6);

pub const DOOR: Pos = Pos::new(21, 7);
/// Palette index of the door color.
pub const DOOR_COLOR_INDEX: usize = 5;

/// The irregular lava run flanking the door, west side of the goal pocket.
const BARRIER_FLANK: [Pos; 8] = [
    Pos::new(22, 5),
    Pos::new(22, 6),
    Pos::new(20, 7),
    Pos::new(19, 8),
    Pos::new(18, 9),
    Pos::new(17, 9),
    Pos::new(17, 10),
    Pos::new(17, 11),
];

/// Lava cells that close the goal pocket: the flank, a column from the
/// flank up to the top wall, a floor under the pocket and its east side.
pub fn barrier_cells() -> Vec<Pos> {
    let north = (1..=4).map(|y| Pos::new(22, y));
    let floor = (18..=30).map(|x| Pos::new(x, 11));
    let east = (1..=10).map(|y| Pos::new(30, y));
    BARRIER_FLANK
        .into_iter()
        .chain(north)
        .chain(floor)
        .chain(east)
        .collect()
}

pub fn door_tile() -> Tile {
    Tile::Door {
        color: Color::from_index(DOOR_COLOR_INDEX).unwrap_or(Color::Yellow),
        locked: true,
    }
}

/// Row of the hazard lane for a given baseline, or None on overflow.
pub fn hazard_row(baseline_row: Coord) -> Option<Coord> {
    baseline_row.checked_add(HAZARD_LANE_OFFSET)
}
