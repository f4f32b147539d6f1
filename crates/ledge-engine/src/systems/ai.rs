//! Enemy AI behaviors, driven once per fixed step before movement.

use glam::Vec2;

use crate::components::entity::{AiKind, AiState, Entity, EntityKind};

/// Distance at which an idle walker notices the player.
pub const AGGRO_RADIUS: f32 = 3.0;
/// Horizontal speed of a walking enemy.
pub const WALK_SPEED: f32 = 1.0;

/// Run the entity's AI against the player's current position.
/// Non-enemies are left untouched.
pub fn drive(e: &mut Entity, player_pos: Vec2) {
    let EntityKind::Enemy(ai) = &mut e.kind else {
        return;
    };
    match ai.kind {
        AiKind::Walker => match ai.state {
            AiState::Idle => {
                // Aggro is permanent: there is no transition back to Idle.
                if e.pos.distance(player_pos) < AGGRO_RADIUS {
                    ai.state = AiState::Walking;
                }
            }
            AiState::Walking => {
                // Strict comparison: at equal x the enemy walks left.
                e.vel.x = if player_pos.x > e.pos.x {
                    WALK_SPEED
                } else {
                    -WALK_SPEED
                };
            }
        },
    }
}
