//! Shared primitive types used across the entire generator.

use serde::{Deserialize, Serialize};

/// A grid coordinate. Signed so relative glyph offsets never underflow.
pub type Coord = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub x: Coord,
    pub y: Coord,
}

impl Pos {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours, in facing order (E, S, W, N).
    pub fn neighbours(self) -> [Pos; 4] {
        Direction::ALL.map(|d| {
            let (dx, dy) = d.delta();
            Pos::new(self.x + dx, self.y + dy)
        })
    }
}

/// Agent facing. Discriminants match the runtime's direction indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Unit step in grid space (y grows downward).
    pub fn delta(self) -> (Coord, Coord) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }
}

/// The runtime's named color palette, in its canonical (sorted) order.
/// NEVER reorder: door and key colors are addressed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Blue,
    Green,
    Grey,
    Purple,
    Red,
    Yellow,
}

impl Color {
    pub const PALETTE: [Color; 6] = [
        Color::Blue,
        Color::Green,
        Color::Grey,
        Color::Purple,
        Color::Red,
        Color::Yellow,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::PALETTE.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Grey => "grey",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}
