//! End-to-end layout tests for the PARADISE level.

use paradise_core::{
    generate,
    layout::{barrier_cells, DEFAULT_ANCHOR_COLUMNS, DOOR, GOAL, KEYS},
    types::{Color, Pos},
    LevelComposer, LevelConfig, LevelError, Tile,
};

const ANCHORS: [i32; 8] = [3, 8, 13, 18, 23, 28, 31, 36];

#[test]
fn paradise_scenario() {
    let _ = env_logger::builder().is_test(true).try_init();
    let grid = generate(44, 44, "PARADISE", 20, &ANCHORS).expect("generate");

    assert_eq!(grid.get(3, 20), Some(Tile::Wall));
    assert_eq!(grid.get(3, 26), Some(Tile::Lava));
    assert_eq!(
        grid.get(21, 7),
        Some(Tile::Door { color: Color::Yellow, locked: true })
    );
    assert_eq!(grid.get(25, 6), Some(Tile::Goal));
    assert_eq!(grid.get(20, 6), Some(Tile::Key { color: Color::Yellow }));
    assert_eq!(grid.get(20, 15), Some(Tile::Key { color: Color::Blue }));
    assert_eq!(grid.get(35, 12), Some(Tile::Key { color: Color::Purple }));
}

#[test]
fn boundary_is_solid_wall() {
    let grid = generate(44, 44, "PARADISE", 20, &ANCHORS).unwrap();
    for i in 0..44 {
        for pos in [Pos::new(i, 0), Pos::new(i, 43), Pos::new(0, i), Pos::new(43, i)] {
            assert_eq!(grid.at(pos), Some(Tile::Wall), "boundary gap at {pos:?}");
        }
    }
}

#[test]
fn hazard_lane_has_one_lava_per_letter() {
    let grid = generate(44, 44, "PARADISE", 20, &ANCHORS).unwrap();
    let lane: Vec<i32> = (0..44)
        .filter(|&x| grid.get(x, 26) == Some(Tile::Lava))
        .collect();
    assert_eq!(lane, ANCHORS.to_vec(), "lava lane must sit exactly under each anchor");
}

#[test]
fn hazard_lane_follows_the_baseline() {
    let grid = generate(44, 44, "PARADISE", 14, &ANCHORS).unwrap();
    for x in ANCHORS {
        assert_eq!(grid.get(x, 20), Some(Tile::Lava), "no lava under anchor {x}");
        assert_eq!(grid.get(x, 14), Some(Tile::Wall), "glyph missing at anchor {x}");
    }
}

#[test]
fn entities_stay_inside_the_boundary_for_all_sizes() {
    for size in 44..=64 {
        let level = LevelComposer::new(LevelConfig::with_size(size))
            .compose()
            .unwrap_or_else(|e| panic!("size {size} failed: {e}"));
        let grid = &level.grid;
        let entities = grid.positions_of(|t| {
            matches!(t, Tile::Door { .. } | Tile::Key { .. } | Tile::Goal | Tile::Lava)
        });
        for pos in entities {
            assert!(grid.is_interior(pos), "{pos:?} escapes the boundary at size {size}");
        }
        assert!(grid.is_interior(level.agent.pos));
    }
}

#[test]
fn exactly_one_locked_door_and_one_goal() {
    let grid = generate(44, 44, "PARADISE", 20, &ANCHORS).unwrap();
    assert_eq!(grid.positions_of(|t| matches!(t, Tile::Door { .. })), vec![DOOR]);
    assert_eq!(grid.positions_of(|t| *t == Tile::Goal), vec![GOAL]);
    assert_eq!(grid.count(|t| matches!(t, Tile::Key { .. })), KEYS.len());
    for pos in barrier_cells() {
        assert_eq!(grid.at(pos), Some(Tile::Lava), "barrier hole at {pos:?}");
    }
}

#[test]
fn smallest_grid_that_fits_the_layout() {
    // Rightmost stroke is the E at x=38, lowest is the hazard lane at y=26.
    assert!(generate(40, 28, "PARADISE", 20, &DEFAULT_ANCHOR_COLUMNS).is_ok());
}

#[test]
fn too_narrow_grid_is_a_config_error() {
    let err = generate(39, 44, "PARADISE", 20, &ANCHORS).unwrap_err();
    assert!(err.is_config_error(), "expected config error, got {err}");
    assert!(matches!(err, LevelError::OutOfBounds { .. }));
}

#[test]
fn too_short_grid_is_a_config_error() {
    let err = generate(44, 27, "PARADISE", 20, &ANCHORS).unwrap_err();
    assert!(matches!(err, LevelError::OutOfBounds { y: 26, .. }), "got {err}");
}

#[test]
fn tiny_grid_fails_before_any_write() {
    for (w, h) in [(10, 10), (20, 44), (44, 10)] {
        let err = generate(w, h, "PARADISE", 20, &ANCHORS).unwrap_err();
        assert!(err.is_config_error(), "{w}x{h}: expected config error, got {err}");
    }
}

#[test]
fn mismatched_anchor_list_is_rejected() {
    let err = generate(44, 44, "PARADISE", 20, &ANCHORS[..7]).unwrap_err();
    assert!(matches!(err, LevelError::AnchorCountMismatch { letters: 8, anchors: 7 }));
}

#[test]
fn unsupported_letter_is_rejected() {
    let err = generate(44, 44, "PARADIZE", 20, &ANCHORS).unwrap_err();
    assert!(matches!(err, LevelError::UnsupportedGlyph('Z')));
}

#[test]
fn level_carries_mission_pose_and_budget() {
    let level = LevelComposer::new(LevelConfig::default()).compose().unwrap();
    assert_eq!(level.mission, "grand mission");
    assert_eq!(level.agent.pos, Pos::new(18, 6));
    assert_eq!(level.max_steps, 4 * 44 * 44);
}

#[test]
fn oversized_grid_is_rejected_before_allocation() {
    let err = LevelComposer::new(LevelConfig::with_size(50_000))
        .compose()
        .unwrap_err();
    assert!(matches!(err, LevelError::InvalidDimensions { .. }), "got {err}");
    assert!(err.is_config_error());
}

#[test]
fn baseline_near_the_integer_limit_is_out_of_bounds() {
    let config = LevelConfig {
        baseline_row: i32::MAX - 2,
        ..LevelConfig::default()
    };
    let err = LevelComposer::new(config).compose().unwrap_err();
    assert!(matches!(err, LevelError::OutOfBounds { .. }), "got {err}");
}

#[test]
fn anchor_near_the_integer_limit_is_out_of_bounds() {
    let mut anchors = ANCHORS;
    anchors[7] = i32::MAX;
    let err = generate(44, 44, "PARADISE", 20, &anchors).unwrap_err();
    assert!(matches!(err, LevelError::OutOfBounds { .. }), "got {err}");
}

#[test]
fn step_budget_saturates_for_huge_grids() {
    assert_eq!(LevelConfig::with_size(50_000).effective_max_steps(), u32::MAX);
}
