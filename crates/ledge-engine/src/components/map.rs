//! Tile map with per-tile collidability.
//!
//! The grid is row-major with row 0 at the top and rows descending in world
//! space: tile (0, 0) is centered on the world origin, tile (x, y) on
//! (x * tile_size, -y * tile_size). Solidity probes answer point queries
//! with per-axis penetration, which the physics passes use to push entities
//! out of the ground and walls.

use glam::Vec2;

use crate::components::sprite::AtlasId;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderInstance;

/// A single tile. None in the grid represents an empty tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Whether entities collide with this tile.
    pub solid: bool,
}

impl Tile {
    /// A solid tile at the given atlas cell.
    pub fn new(col: f32, row: f32) -> Self {
        Self {
            col,
            row,
            solid: true,
        }
    }

    /// A decorative tile: drawn, never collided with.
    pub fn decor(col: f32, row: f32) -> Self {
        Self {
            col,
            row,
            solid: false,
        }
    }
}

/// How deep a probed point sits inside its tile, per axis.
/// Positive values measure distance to the nearest face along that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub x: f32,
    pub y: f32,
}

/// Grid-based level geometry and scenery.
#[derive(Debug, Clone)]
pub struct TileMap {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    /// Size of each tile in world units.
    pub tile_size: f32,
    /// Atlas containing the tile graphics.
    pub atlas: AtlasId,
    tiles: Vec<Option<Tile>>,
}

impl TileMap {
    /// Create an empty map.
    pub fn new(width: u32, height: u32, tile_size: f32) -> Self {
        let count = (width * height) as usize;
        Self {
            width,
            height,
            tile_size,
            atlas: AtlasId(0),
            tiles: vec![None; count],
        }
    }

    /// Build a map from level data in the classic id format: 0 is empty,
    /// id n is a solid tile using atlas cell n of an `atlas_cols`-wide sheet.
    pub fn from_level_data(
        width: u32,
        height: u32,
        data: &[u32],
        tile_size: f32,
        atlas_cols: u32,
    ) -> Self {
        debug_assert_eq!(data.len(), (width * height) as usize);
        let mut map = Self::new(width, height, tile_size);
        for (i, &id) in data.iter().enumerate() {
            if id != 0 {
                let col = (id % atlas_cols) as f32;
                let row = (id / atlas_cols) as f32;
                map.tiles[i] = Some(Tile::new(col, row));
            }
        }
        map
    }

    pub fn with_atlas(mut self, atlas: AtlasId) -> Self {
        self.atlas = atlas;
        self
    }

    /// Get a tile at grid position (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles[(y * self.width + x) as usize].as_ref()
    }

    /// Set a tile at grid position (x, y).
    pub fn set(&mut self, x: u32, y: u32, tile: Option<Tile>) {
        if x < self.width && y < self.height {
            self.tiles[(y * self.width + x) as usize] = tile;
        }
    }

    /// Count of non-empty tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    /// World-space bounds as (min, max) corners.
    /// Tile centers sit on the grid, so bounds extend half a tile past them.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = self.tile_size / 2.0;
        let min = Vec2::new(-half, -(self.height as f32) * self.tile_size + half);
        let max = Vec2::new(self.width as f32 * self.tile_size - half, half);
        (min, max)
    }

    /// World-space center of tile (x, y).
    pub fn tile_to_world(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(x as f32 * self.tile_size, -(y as f32) * self.tile_size)
    }

    /// Grid coordinates of the tile containing a world point, if any.
    pub fn world_to_tile(&self, point: Vec2) -> Option<(u32, u32)> {
        let (min, max) = self.bounds();
        if point.x < min.x || point.x > max.x || point.y > max.y || point.y < min.y {
            return None;
        }
        let half = self.tile_size / 2.0;
        let tx = ((point.x + half) / self.tile_size).floor() as i32;
        let ty = ((half - point.y) / self.tile_size).floor() as i32;
        if tx < 0 || tx >= self.width as i32 || ty < 0 || ty >= self.height as i32 {
            return None;
        }
        Some((tx as u32, ty as u32))
    }

    /// Solidity probe: if `point` lies inside a solid tile, how deep it sits
    /// along each axis. Returns None outside the map, on empty tiles and on
    /// decorative tiles.
    pub fn probe(&self, point: Vec2) -> Option<Penetration> {
        let (tx, ty) = self.world_to_tile(point)?;
        let tile = self.get(tx, ty)?;
        if !tile.solid {
            return None;
        }
        let half = self.tile_size / 2.0;
        let center = self.tile_to_world(tx, ty);
        Some(Penetration {
            x: half - (point.x - center.x).abs(),
            y: half - (point.y - center.y).abs(),
        })
    }

    /// Build render instances for tiles within the camera viewport.
    pub fn build_visible_instances(&self, camera: &Camera2D) -> Vec<RenderInstance> {
        let mut instances = Vec::new();
        let half = self.tile_size / 2.0;
        for ty in 0..self.height {
            for tx in 0..self.width {
                if let Some(tile) = self.get(tx, ty) {
                    let center = self.tile_to_world(tx, ty);
                    if camera.is_rect_visible(center, Vec2::splat(half)) {
                        instances.push(RenderInstance {
                            x: center.x,
                            y: center.y,
                            sprite_col: tile.col,
                            atlas_row: tile.row,
                            alpha: 1.0,
                        });
                    }
                }
            }
        }
        instances
    }

    /// Build all instances with no culling. Fine for screen-sized maps.
    pub fn build_all_instances(&self) -> Vec<RenderInstance> {
        let mut instances = Vec::new();
        for ty in 0..self.height {
            for tx in 0..self.width {
                if let Some(tile) = self.get(tx, ty) {
                    let center = self.tile_to_world(tx, ty);
                    instances.push(RenderInstance {
                        x: center.x,
                        y: center.y,
                        sprite_col: tile.col,
                        atlas_row: tile.row,
                        alpha: 1.0,
                    });
                }
            }
        }
        instances
    }
}
