//! Block-letter glyphs rendered as wall strokes.
//!
//! Each glyph is a 3-wide x 5-tall pattern described as data: a short list
//! of horizontal and vertical runs relative to the anchor (top-left cell).
//! Adding a letter means adding a table, not a drawing routine.

use crate::{
    error::{LevelError, LevelResult},
    grid::{GridBuilder, Tile},
    types::{Coord, Pos},
};
use std::collections::BTreeSet;

pub const GLYPH_WIDTH: Coord = 3;
pub const GLYPH_HEIGHT: Coord = 5;

/// One run of wall cells. Ranges are inclusive and relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// Columns `from..=to` on `row`.
    Row { row: Coord, from: Coord, to: Coord },
    /// Rows `from..=to` on `col`.
    Column { col: Coord, from: Coord, to: Coord },
}

impl Stroke {
    fn cells(self) -> impl Iterator<Item = (Coord, Coord)> {
        let (fixed, from, to, horizontal) = match self {
            Stroke::Row { row, from, to } => (row, from, to, true),
            Stroke::Column { col, from, to } => (col, from, to, false),
        };
        (from..=to).map(move |v| if horizontal { (v, fixed) } else { (fixed, v) })
    }
}

const fn row(row: Coord, from: Coord, to: Coord) -> Stroke {
    Stroke::Row { row, from, to }
}

const fn col(col: Coord, from: Coord, to: Coord) -> Stroke {
    Stroke::Column { col, from, to }
}

const P_STROKES: &[Stroke] = &[row(0, 0, 2), row(1, 2, 2), row(2, 0, 2), col(0, 0, 4)];
const A_STROKES: &[Stroke] = &[row(0, 0, 2), col(0, 1, 4), col(2, 1, 4), row(2, 0, 2)];
const R_STROKES: &[Stroke] = &[
    row(0, 0, 2),
    row(1, 2, 2),
    row(2, 0, 2),
    col(0, 0, 4),
    // leg
    row(3, 1, 1),
    row(4, 2, 2),
];
const D_STROKES: &[Stroke] = &[col(0, 0, 4), row(0, 0, 2), row(4, 0, 2), col(2, 1, 3)];
const I_STROKES: &[Stroke] = &[col(0, 0, 4)];
const S_STROKES: &[Stroke] = &[
    row(0, 0, 2),
    row(1, 0, 0),
    row(2, 0, 2),
    row(3, 2, 2),
    row(4, 0, 2),
];
const E_STROKES: &[Stroke] = &[col(0, 0, 4), row(0, 0, 2), row(2, 0, 2), row(4, 0, 2)];

/// The supported alphabet (the distinct letters of "PARADISE").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    P,
    A,
    R,
    D,
    I,
    S,
    E,
}

impl Glyph {
    pub const ALL: [Glyph; 7] = [
        Glyph::P,
        Glyph::A,
        Glyph::R,
        Glyph::D,
        Glyph::I,
        Glyph::S,
        Glyph::E,
    ];

    /// Case-insensitive lookup.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(Glyph::P),
            'A' => Some(Glyph::A),
            'R' => Some(Glyph::R),
            'D' => Some(Glyph::D),
            'I' => Some(Glyph::I),
            'S' => Some(Glyph::S),
            'E' => Some(Glyph::E),
            _ => None,
        }
    }

    /// Parse a whole word, failing on the first unsupported letter.
    pub fn parse_word(word: &str) -> LevelResult<Vec<Glyph>> {
        word.chars()
            .map(|c| Glyph::from_char(c).ok_or(LevelError::UnsupportedGlyph(c)))
            .collect()
    }

    pub fn letter(&self) -> char {
        match self {
            Glyph::P => 'P',
            Glyph::A => 'A',
            Glyph::R => 'R',
            Glyph::D => 'D',
            Glyph::I => 'I',
            Glyph::S => 'S',
            Glyph::E => 'E',
        }
    }

    pub fn strokes(&self) -> &'static [Stroke] {
        match self {
            Glyph::P => P_STROKES,
            Glyph::A => A_STROKES,
            Glyph::R => R_STROKES,
            Glyph::D => D_STROKES,
            Glyph::I => I_STROKES,
            Glyph::S => S_STROKES,
            Glyph::E => E_STROKES,
        }
    }

    /// Exact set of wall offsets `(dx, dy)` this glyph stamps.
    pub fn cells(&self) -> BTreeSet<(Coord, Coord)> {
        self.strokes().iter().flat_map(|s| s.cells()).collect()
    }
}

/// Check that a glyph's full footprint fits inside the boundary ring.
pub fn check_footprint(glyph: Glyph, anchor: Pos, width: Coord, height: Coord) -> LevelResult<()> {
    let out_of_bounds = |corner: Pos| LevelError::OutOfBounds {
        what: format!("glyph '{}' anchored at ({}, {})", glyph.letter(), anchor.x, anchor.y),
        x: corner.x,
        y: corner.y,
        width,
        height,
    };
    let far = match (
        anchor.x.checked_add(GLYPH_WIDTH - 1),
        anchor.y.checked_add(GLYPH_HEIGHT - 1),
    ) {
        (Some(x), Some(y)) => Pos::new(x, y),
        _ => return Err(out_of_bounds(anchor)),
    };
    for corner in [anchor, far] {
        if corner.x < 1 || corner.x > width - 2 || corner.y < 1 || corner.y > height - 2 {
            return Err(out_of_bounds(corner));
        }
    }
    Ok(())
}

/// Stamp `glyph` as walls with its top-left at (anchor_x, anchor_y).
///
/// The footprint is validated before any write, so a rejected glyph leaves
/// the grid untouched. Returns the number of cells written.
pub fn draw_letter(
    builder: &mut GridBuilder,
    glyph: Glyph,
    anchor_x: Coord,
    anchor_y: Coord,
) -> LevelResult<usize> {
    check_footprint(glyph, Pos::new(anchor_x, anchor_y), builder.width(), builder.height())?;
    let mut writes = 0;
    for stroke in glyph.strokes() {
        for (dx, dy) in stroke.cells() {
            builder.set(anchor_x + dx, anchor_y + dy, Tile::Wall)?;
            writes += 1;
        }
    }
    Ok(writes)
}
