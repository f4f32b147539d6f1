use glam::Vec2;

use crate::components::entity::Entity;
use crate::components::sprite::SpriteComponent;
use crate::core::world::World;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Append one instance for a sprite drawn at a world position.
pub fn push_sprite(sprite: &SpriteComponent, pos: Vec2, buffer: &mut RenderBuffer) {
    buffer.push(RenderInstance {
        x: pos.x,
        y: pos.y,
        sprite_col: sprite.col,
        atlas_row: sprite.row,
        alpha: sprite.alpha,
    });
}

/// Append an instance for a single entity, if it has a sprite.
pub fn push_entity(entity: &Entity, buffer: &mut RenderBuffer) {
    if let Some(sprite) = &entity.sprite {
        push_sprite(sprite, entity.pos, buffer);
    }
}

/// Flatten the world into the render buffer: map tiles first so entities
/// draw on top, then every active, in-play entity that has a sprite.
/// The caller clears the buffer; build functions only append.
pub fn build_world_instances(world: &World, camera: &Camera2D, buffer: &mut RenderBuffer) {
    if let Some(map) = world.map() {
        buffer.extend(map.build_visible_instances(camera));
    }
    for entity in world.iter() {
        if !entity.active || entity.lost {
            continue;
        }
        push_entity(entity, buffer);
    }
}
