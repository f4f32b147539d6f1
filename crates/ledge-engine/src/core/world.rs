use glam::Vec2;

use crate::components::entity::Entity;
use crate::components::map::TileMap;
use crate::core::physics::{self, Axis};
use crate::systems::ai;

/// The complete simulation state: one player, the level's platforms and
/// enemies, and optional tile geometry. Owned by the loop driver, never
/// global.
///
/// Entities are never removed: platform and enemy indices stay valid for
/// the lifetime of a level, with `lost` and `active` as soft-delete flags.
pub struct World {
    player: Entity,
    platforms: Vec<Entity>,
    enemies: Vec<Entity>,
    map: Option<TileMap>,
}

impl World {
    pub fn new() -> Self {
        Self {
            player: Entity::player(),
            platforms: Vec::new(),
            enemies: Vec::new(),
            map: None,
        }
    }

    pub fn set_player(&mut self, player: Entity) {
        self.player = player;
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }

    /// Add a platform, returning its stable index.
    pub fn add_platform(&mut self, platform: Entity) -> usize {
        self.platforms.push(platform);
        self.platforms.len() - 1
    }

    /// Add an enemy, returning its stable index.
    pub fn add_enemy(&mut self, enemy: Entity) -> usize {
        self.enemies.push(enemy);
        self.enemies.len() - 1
    }

    pub fn platforms(&self) -> &[Entity] {
        &self.platforms
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Entity] {
        &mut self.enemies
    }

    pub fn set_map(&mut self, map: TileMap) {
        self.map = Some(map);
    }

    pub fn map(&self) -> Option<&TileMap> {
        self.map.as_ref()
    }

    /// Iterate every entity: player first, then platforms, then enemies.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player)
            .chain(self.platforms.iter())
            .chain(self.enemies.iter())
    }

    /// Advance the simulation by one fixed step.
    ///
    /// The player updates first. Enemies then update in index order against
    /// the player's post-update position, so AI reacts to where the player
    /// is this tick, not where it was last tick.
    pub fn step(&mut self, dt: f32) {
        step_entity(
            &mut self.player,
            &mut self.platforms,
            Some(&mut self.enemies),
            self.map.as_ref(),
            None,
            dt,
        );
        let player_pos = self.player.pos;
        for enemy in self.enemies.iter_mut() {
            step_entity(
                enemy,
                &mut self.platforms,
                None,
                self.map.as_ref(),
                Some(player_pos),
                dt,
            );
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// One entity tick. Y is moved and fully resolved before X begins; the
/// player additionally resolves X then Y against enemies between the two
/// axis phases. Map geometry resolves before platform entities on each
/// axis.
fn step_entity(
    e: &mut Entity,
    platforms: &mut [Entity],
    enemies: Option<&mut [Entity]>,
    map: Option<&TileMap>,
    player_pos: Option<Vec2>,
    dt: f32,
) {
    e.contacts.reset();
    e.vel += e.accel * dt;
    if let Some(player_pos) = player_pos {
        ai::drive(e, player_pos);
    }

    e.pos.y += e.vel.y * dt;
    if let Some(map) = map {
        physics::resolve_map(e, map, Axis::Y);
    }
    physics::resolve_pass(e, platforms, Axis::Y);
    if let Some(enemies) = enemies {
        physics::resolve_pass(e, enemies, Axis::X);
        physics::resolve_pass(e, enemies, Axis::Y);
    }

    e.pos.x += e.vel.x * dt;
    if let Some(map) = map {
        physics::resolve_map(e, map, Axis::X);
    }
    physics::resolve_pass(e, platforms, Axis::X);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::{AiKind, AiState, EntityKind, JUMP_SPEED};

    const DT: f32 = 1.0 / 60.0;
    const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

    fn walking_state(e: &Entity) -> AiState {
        match e.kind {
            EntityKind::Enemy(ai) => ai.state,
            _ => panic!("not an enemy"),
        }
    }

    #[test]
    fn step_integrates_acceleration() {
        let mut world = World::new();
        world.set_player(Entity::player().with_accel(GRAVITY));
        world.step(DT);
        let vy = world.player().vel.y;
        assert!((vy - GRAVITY.y * DT).abs() < 1e-6);
    }

    #[test]
    fn enemies_see_the_player_position_of_this_tick() {
        let mut world = World::new();
        let mut player = Entity::player();
        player.vel.x = 9.0;
        world.set_player(player);
        // 3.1 away before the step, 2.95 after the player moves. Aggro only
        // happens if the enemy reads the post-update snapshot.
        world.add_enemy(Entity::enemy(AiKind::Walker).with_pos(Vec2::new(3.1, 0.0)));
        world.step(DT);
        assert_eq!(walking_state(&world.enemies()[0]), AiState::Walking);
    }

    #[test]
    fn falling_player_lands_on_floor_and_can_jump() {
        let mut world = World::new();
        world.set_player(
            Entity::player()
                .with_pos(Vec2::new(0.0, 0.2))
                .with_accel(GRAVITY),
        );
        world.add_platform(Entity::platform().with_pos(Vec2::new(0.0, -1.0)));
        for _ in 0..120 {
            world.step(DT);
        }
        let player = world.player();
        assert!(player.contacts.bottom, "player should be grounded");
        assert_eq!(player.vel.y, 0.0);
        assert!((player.pos.y - 0.0).abs() < 1e-3);

        world.player_mut().jump();
        assert_eq!(world.player().vel.y, JUMP_SPEED);
    }

    #[test]
    fn stomp_during_step_defeats_enemy_only() {
        let mut world = World::new();
        world.set_player(
            Entity::player()
                .with_pos(Vec2::new(0.0, 0.0))
                .with_accel(GRAVITY),
        );
        world.add_enemy(Entity::enemy(AiKind::Walker).with_pos(Vec2::new(0.0, -1.05)));
        for _ in 0..30 {
            world.step(DT);
            if world.enemies()[0].lost {
                break;
            }
        }
        assert!(world.enemies()[0].lost, "enemy should have been stomped");
        assert!(!world.player().lost);
    }

    #[test]
    fn walking_into_an_enemy_loses_the_mission() {
        let mut world = World::new();
        let mut player = Entity::player().with_pos(Vec2::new(-1.5, 0.0));
        player.vel.x = 3.0;
        world.set_player(player);
        world.add_enemy(Entity::enemy(AiKind::Walker));
        for _ in 0..30 {
            world.step(DT);
            if world.player().lost {
                break;
            }
        }
        assert!(world.player().lost);
        assert!(!world.enemies()[0].lost);
    }

    #[test]
    fn player_falls_through_where_map_has_no_tile() {
        // Three empty columns: corner probes at x +/- 0.5 must not reach the
        // solid columns at either end.
        let data = [1, 0, 0, 0, 1];
        let mut world = World::new();
        world.set_map(TileMap::from_level_data(5, 1, &data, 1.0, 4));
        world.set_player(
            Entity::player()
                .with_pos(Vec2::new(2.0, 1.0))
                .with_accel(GRAVITY),
        );
        for _ in 0..120 {
            world.step(DT);
        }
        assert!(
            world.player().pos.y < -1.0,
            "no tile under x=2, the player must fall past the map"
        );
    }

    #[test]
    fn player_lands_on_map_tiles() {
        let data = [1, 1, 1];
        let mut world = World::new();
        world.set_map(TileMap::from_level_data(3, 1, &data, 1.0, 4));
        world.set_player(
            Entity::player()
                .with_pos(Vec2::new(1.0, 2.0))
                .with_accel(GRAVITY),
        );
        for _ in 0..120 {
            world.step(DT);
        }
        let player = world.player();
        assert!(player.contacts.bottom);
        // Tile row 0 top face is at 0.5, so the player center rests at 1.0.
        assert!((player.pos.y - 1.0).abs() < 1e-3);
    }

    #[test]
    fn iter_yields_player_platforms_enemies_in_order() {
        let mut world = World::new();
        world.set_player(Entity::player().with_pos(Vec2::new(1.0, 0.0)));
        world.add_platform(Entity::platform().with_pos(Vec2::new(2.0, 0.0)));
        world.add_enemy(Entity::enemy(AiKind::Walker).with_pos(Vec2::new(3.0, 0.0)));
        let xs: Vec<f32> = world.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn defeated_enemies_keep_their_slot() {
        let mut world = World::new();
        world.add_enemy(Entity::enemy(AiKind::Walker));
        let idx = world.add_enemy(Entity::enemy(AiKind::Walker).with_pos(Vec2::new(4.0, 0.0)));
        world.enemies_mut()[0].lost = true;
        assert_eq!(world.enemies().len(), 2, "lost enemies are not removed");
        assert_eq!(world.enemies()[idx].pos.x, 4.0);
    }
}
