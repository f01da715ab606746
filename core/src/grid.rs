//! Grid storage: tiles, the mutable builder used during generation, and
//! the immutable grid handed to the runtime.
//!
//! Cells are stored row-major in a flat vector (`y * width + x`).
//! Out-of-range coordinates never wrap or clip: reads return `None`,
//! writes return `OutOfBounds`.

use crate::{
    error::{LevelError, LevelResult},
    types::{Color, Coord, Pos},
};
use serde::{Deserialize, Serialize};

/// The single occupant of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Lava,
    Door { color: Color, locked: bool },
    Key { color: Color },
    Goal,
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// Stable name used in build logs and snapshots.
    pub fn name(&self) -> &'static str {
        match self {
            Tile::Empty => "empty",
            Tile::Wall => "wall",
            Tile::Lava => "lava",
            Tile::Door { .. } => "door",
            Tile::Key { .. } => "key",
            Tile::Goal => "goal",
        }
    }
}

/// Immutable grid. Produced only by `GridBuilder::freeze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: Coord,
    height: Coord,
    cells: Vec<Tile>,
}

impl Grid {
    fn index(&self, x: Coord, y: Coord) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        usize::try_from(y * self.width + x).ok()
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    /// Tile at (x, y), or None when out of bounds.
    pub fn get(&self, x: Coord, y: Coord) -> Option<Tile> {
        self.index(x, y).and_then(|i| self.cells.get(i).copied())
    }

    pub fn at(&self, pos: Pos) -> Option<Tile> {
        self.get(pos.x, pos.y)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos.x, pos.y).is_some()
    }

    /// True when `pos` lies inside the one-cell boundary ring.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x >= 1 && pos.x <= self.width - 2 && pos.y >= 1 && pos.y <= self.height - 2
    }

    /// Every position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Pos::new(x, y)))
    }

    /// Positions (row-major) whose tile satisfies `pred`.
    pub fn positions_of(&self, pred: impl Fn(&Tile) -> bool) -> Vec<Pos> {
        self.positions()
            .filter(|p| self.at(*p).is_some_and(|t| pred(&t)))
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Tile) -> bool) -> usize {
        self.cells.iter().filter(|t| pred(t)).count()
    }

    /// Reopen the grid for editing, e.g. to derive a variant in tests.
    pub fn to_builder(&self) -> GridBuilder {
        GridBuilder { grid: self.clone() }
    }
}

/// The owned, mutable grid threaded through the generation pipeline.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    grid: Grid,
}

impl GridBuilder {
    /// Allocate a `width x height` grid of empty cells.
    pub fn new(width: Coord, height: Coord) -> LevelResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(LevelError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(LevelError::InvalidDimensions { width, height })?;
        Ok(Self {
            grid: Grid {
                width,
                height,
                cells: vec![Tile::Empty; len],
            },
        })
    }

    pub fn width(&self) -> Coord {
        self.grid.width
    }

    pub fn height(&self) -> Coord {
        self.grid.height
    }

    pub fn get(&self, x: Coord, y: Coord) -> Option<Tile> {
        self.grid.get(x, y)
    }

    /// Read-only view of the grid under construction.
    pub fn view(&self) -> &Grid {
        &self.grid
    }

    /// Write a tile. Last write wins; the previous occupant is returned so
    /// callers can record intentional overwrites.
    pub fn set(&mut self, x: Coord, y: Coord, tile: Tile) -> LevelResult<Tile> {
        let (width, height) = (self.grid.width, self.grid.height);
        let slot = self
            .grid
            .index(x, y)
            .and_then(|i| self.grid.cells.get_mut(i))
            .ok_or_else(|| LevelError::OutOfBounds {
                what: format!("{} tile", tile.name()),
                x,
                y,
                width,
                height,
            })?;
        Ok(std::mem::replace(slot, tile))
    }

    /// Horizontal run of `tile` over columns `x..x+len` on row `y`.
    pub fn horz_run(&mut self, x: Coord, y: Coord, len: Coord, tile: Tile) -> LevelResult<()> {
        for xx in x..x + len {
            self.set(xx, y, tile)?;
        }
        Ok(())
    }

    /// Vertical run of `tile` over rows `y..y+len` on column `x`.
    pub fn vert_run(&mut self, x: Coord, y: Coord, len: Coord, tile: Tile) -> LevelResult<()> {
        for yy in y..y + len {
            self.set(x, yy, tile)?;
        }
        Ok(())
    }

    /// One-cell-thick wall rectangle with top-left (x, y).
    pub fn wall_rect(&mut self, x: Coord, y: Coord, w: Coord, h: Coord) -> LevelResult<()> {
        self.horz_run(x, y, w, Tile::Wall)?;
        self.horz_run(x, y + h - 1, w, Tile::Wall)?;
        self.vert_run(x, y, h, Tile::Wall)?;
        self.vert_run(x + w - 1, y, h, Tile::Wall)?;
        Ok(())
    }

    /// Finish construction.
    pub fn freeze(self) -> Grid {
        self.grid
    }
}
