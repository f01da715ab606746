//! Plain-text rendering of a grid, one character per cell.

use crate::{
    config::AgentPose,
    grid::{Grid, Tile},
    types::{Direction, Pos},
};

pub fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Empty => '.',
        Tile::Wall => '#',
        Tile::Lava => '~',
        Tile::Door { locked: true, .. } => 'L',
        Tile::Door { locked: false, .. } => 'D',
        Tile::Key { .. } => 'K',
        Tile::Goal => 'G',
    }
}

pub fn agent_char(dir: Direction) -> char {
    match dir {
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
        Direction::North => '^',
    }
}

/// One string per row, top to bottom. The agent, if given, is drawn over
/// whatever tile it stands on.
pub fn render_rows(grid: &Grid, agent: Option<AgentPose>) -> Vec<String> {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| match agent {
                    Some(a) if a.pos == Pos::new(x, y) => agent_char(a.dir),
                    _ => grid.get(x, y).map(tile_char).unwrap_or(' '),
                })
                .collect()
        })
        .collect()
}

pub fn render_ascii(grid: &Grid, agent: Option<AgentPose>) -> String {
    let mut out = render_rows(grid, agent).join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridBuilder;

    #[test]
    fn renders_walls_and_agent() {
        let mut b = GridBuilder::new(4, 3).unwrap();
        b.wall_rect(0, 0, 4, 3).unwrap();
        b.set(2, 1, Tile::Goal).unwrap();
        let agent = AgentPose { pos: Pos::new(1, 1), dir: Direction::North };
        assert_eq!(render_ascii(&b.freeze(), Some(agent)), "####\n#^G#\n####\n");
    }
}
