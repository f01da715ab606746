//! Fallback agent placement: a random free interior cell.

use crate::{
    config::AgentPose,
    error::{LevelError, LevelResult},
    grid::Grid,
    reachability::verify_gated_goal,
    rng::PlacementRng,
    types::{Direction, Pos},
};

pub const MAX_PLACEMENT_TRIES: u32 = 10_000;

/// Pick an empty interior cell that satisfies the gate: outside the goal
/// pocket, not sealed in by walls, with the door's key in reach.
/// Facing is random.
pub fn place_agent(grid: &Grid, rng: &mut PlacementRng) -> LevelResult<AgentPose> {
    for _ in 0..MAX_PLACEMENT_TRIES {
        let pos = Pos::new(
            rng.range_i32(1, grid.width() - 1),
            rng.range_i32(1, grid.height() - 1),
        );
        if !grid.at(pos).is_some_and(|t| t.is_empty()) {
            continue;
        }
        if verify_gated_goal(grid, pos).is_err() {
            continue;
        }
        let dir = u8::try_from(rng.next_u64_below(4))
            .ok()
            .and_then(Direction::from_index)
            .unwrap_or(Direction::East);
        return Ok(AgentPose { pos, dir });
    }
    Err(LevelError::PlacementExhausted {
        tries: MAX_PLACEMENT_TRIES,
    })
}
