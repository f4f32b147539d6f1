//! Level data in the classic tile-id format consumed by
//! `TileMap::from_level_data`: 0 is empty, 1 surface, 2 fill, 3 cliff wall.
//! Row 0 is the top of the level; rows descend in world space.

use glam::Vec2;

/// Columns in the level tileset; ids map onto it row-major.
pub const TILE_ATLAS_COLS: u32 = 4;

/// One level: geometry plus where the player enters and leaves.
pub struct Level {
    pub width: u32,
    pub height: u32,
    pub data: &'static [u32],
    /// World-space position the player starts (and respawns) at.
    pub spawn: Vec2,
    /// Crossing this x coordinate completes the level.
    pub exit_x: f32,
}

pub const LEVELS: [Level; 3] = [
    Level {
        width: 16,
        height: 8,
        data: &LEVEL_1_DATA,
        spawn: Vec2::new(2.0, 0.0),
        exit_x: 14.0,
    },
    Level {
        width: 18,
        height: 8,
        data: &LEVEL_2_DATA,
        spawn: Vec2::new(2.0, 0.0),
        exit_x: 16.0,
    },
    Level {
        width: 18,
        height: 8,
        data: &LEVEL_3_DATA,
        spawn: Vec2::new(5.0, 0.0),
        exit_x: 16.0,
    },
];

// A flat run with one pit before the exit ledge.
#[rustfmt::skip]
const LEVEL_1_DATA: [u32; 16 * 8] = [
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1,
    3, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 2, 2, 2, 2, 2,
];

// Three pillars rising to the right, a pit between each pair.
#[rustfmt::skip]
const LEVEL_2_DATA: [u32; 18 * 8] = [
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 1, 1,
    3, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 2, 2, 2, 0, 2, 2, 2,
    3, 1, 1, 1, 1, 1, 0, 2, 2, 2, 0, 2, 2, 2, 0, 2, 2, 2,
    3, 2, 2, 2, 2, 2, 0, 2, 2, 2, 0, 2, 2, 2, 0, 2, 2, 2,
];

// Terraced ground stepping up to a high exit ledge, with a one-tile
// notch before the final climb.
#[rustfmt::skip]
const LEVEL_3_DATA: [u32; 18 * 8] = [
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 2, 2, 2,
    3, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
];
