//! Axis-separated AABB collision for platformer movement.
//!
//! Queries are pure; all mutation happens in the explicit resolve step.
//! Resolution pushes the moving entity out by penetration depth along one
//! axis at a time, choosing direction by the sign of its velocity on that
//! axis (not by relative position). Zero velocity on the axis resolves
//! nothing: an entity not moving on an axis is never displaced along it.

use glam::Vec2;

use crate::components::entity::Entity;
use crate::components::map::TileMap;

/// Which world axis a resolution pass works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// What resolving one pair did to the participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionEffects {
    /// Self was displaced and its axis velocity zeroed.
    pub pushed: bool,
    /// Self was marked lost by a cross-kind rule.
    pub self_lost: bool,
    /// The other entity was marked lost by a cross-kind rule.
    pub other_lost: bool,
}

/// Pure half-extent AABB overlap test. Edge contact does not count.
pub fn overlaps(a: &Entity, b: &Entity) -> bool {
    let xdist = (a.pos.x - b.pos.x).abs() - (a.size.x + b.size.x) / 2.0;
    let ydist = (a.pos.y - b.pos.y).abs() - (a.size.y + b.size.y) / 2.0;
    xdist < 0.0 && ydist < 0.0
}

/// Overlap test gated on the caller side: a static or inactive `a` never
/// collides, and an inactive `b` is never collided with. The asymmetry is
/// intentional: `touches(a, b)` and `touches(b, a)` can differ.
pub fn touches(a: &Entity, b: &Entity) -> bool {
    if a.is_static() || !a.active || !b.active {
        return false;
    }
    overlaps(a, b)
}

/// Resolve one overlapping pair along `axis`, mutating both sides.
///
/// `e` is pushed out by penetration depth, its axis velocity zeroed and the
/// matching contact flag set. The cross-kind rules then read the accumulated
/// tick flags:
/// - Y, player over enemy (bottom contact): the enemy is lost.
/// - Y, enemy under player (top contact): the enemy itself is lost.
/// - X, player beside enemy (side contact): the player is lost.
/// - X, enemy beside player (side contact): the enemy survives and the
///   player is lost.
/// The X/Y asymmetry in who is marked lost is intentional.
pub fn resolve(e: &mut Entity, other: &mut Entity, axis: Axis) -> ResolutionEffects {
    let mut fx = ResolutionEffects::default();
    match axis {
        Axis::Y => {
            let ydist = (e.pos.y - other.pos.y).abs();
            let penetration = (ydist - e.size.y / 2.0 - other.size.y / 2.0).abs();
            if e.vel.y > 0.0 {
                e.pos.y -= penetration;
                e.vel.y = 0.0;
                e.contacts.top = true;
                fx.pushed = true;
            } else if e.vel.y < 0.0 {
                e.pos.y += penetration;
                e.vel.y = 0.0;
                e.contacts.bottom = true;
                fx.pushed = true;
            }
            if e.is_player() && other.is_enemy() && e.contacts.bottom {
                other.lost = true;
                fx.other_lost = true;
            }
            if e.is_enemy() && other.is_player() && e.contacts.top {
                e.lost = true;
                fx.self_lost = true;
            }
        }
        Axis::X => {
            let xdist = (e.pos.x - other.pos.x).abs();
            let penetration = (xdist - e.size.x / 2.0 - other.size.x / 2.0).abs();
            if e.vel.x > 0.0 {
                e.pos.x -= penetration;
                e.vel.x = 0.0;
                e.contacts.right = true;
                fx.pushed = true;
            } else if e.vel.x < 0.0 {
                e.pos.x += penetration;
                e.vel.x = 0.0;
                e.contacts.left = true;
                fx.pushed = true;
            }
            if e.is_player() && other.is_enemy() && (e.contacts.left || e.contacts.right) {
                e.lost = true;
                fx.self_lost = true;
            }
            if e.is_enemy() && other.is_player() && (e.contacts.left || e.contacts.right) {
                e.lost = false;
                other.lost = true;
                fx.other_lost = true;
            }
        }
    }
    fx
}

/// One resolution pass of `e` against every candidate in `others`.
/// Lost candidates are skipped; each pair is re-tested against the state
/// `e` was left in by the previous candidate.
pub fn resolve_pass(e: &mut Entity, others: &mut [Entity], axis: Axis) {
    for other in others.iter_mut() {
        if touches(e, other) && !other.lost {
            resolve(e, other, axis);
        }
    }
}

/// Resolve `e` against the tile map along one axis.
///
/// Probes face points in world space: three along the leading horizontal
/// edge for Y (center and both corners, first solid hit wins), the two side
/// midpoints for X. Push direction follows the same velocity-sign rule as
/// entity resolution.
pub fn resolve_map(e: &mut Entity, map: &TileMap, axis: Axis) {
    let half = e.size * 0.5;
    match axis {
        Axis::Y => {
            if e.vel.y > 0.0 {
                let probes = [
                    e.pos + Vec2::new(0.0, half.y),
                    e.pos + Vec2::new(-half.x, half.y),
                    e.pos + Vec2::new(half.x, half.y),
                ];
                for point in probes {
                    if let Some(pen) = map.probe(point) {
                        e.pos.y -= pen.y;
                        e.vel.y = 0.0;
                        e.contacts.top = true;
                        break;
                    }
                }
            } else if e.vel.y < 0.0 {
                let probes = [
                    e.pos + Vec2::new(0.0, -half.y),
                    e.pos + Vec2::new(-half.x, -half.y),
                    e.pos + Vec2::new(half.x, -half.y),
                ];
                for point in probes {
                    if let Some(pen) = map.probe(point) {
                        e.pos.y += pen.y;
                        e.vel.y = 0.0;
                        e.contacts.bottom = true;
                        break;
                    }
                }
            }
        }
        Axis::X => {
            if e.vel.x < 0.0 {
                if let Some(pen) = map.probe(e.pos + Vec2::new(-half.x, 0.0)) {
                    e.pos.x += pen.x;
                    e.vel.x = 0.0;
                    e.contacts.left = true;
                }
            } else if e.vel.x > 0.0 {
                if let Some(pen) = map.probe(e.pos + Vec2::new(half.x, 0.0)) {
                    e.pos.x -= pen.x;
                    e.vel.x = 0.0;
                    e.contacts.right = true;
                }
            }
        }
    }
}
