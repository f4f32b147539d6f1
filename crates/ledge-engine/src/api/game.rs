use glam::Vec2;

use crate::api::types::GameEvent;
use crate::assets::registry::SpriteRegistry;
use crate::components::entity::Entity;
use crate::components::sprite::SpriteComponent;
use crate::core::world::World;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderBuffer;
use crate::systems::render;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Visible world width in game units.
    pub world_width: f32,
    /// Visible world height in game units.
    pub world_height: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 10.0,
            world_height: 7.5,
            max_instances: 512,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up initial state: spawn entities, load the map, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick, called once per fixed step before the world steps.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Render pass. The default draws the whole world; override it to control
    /// exactly what appears, e.g. win and fail screens.
    fn render(&self, ctx: &mut RenderContext) {
        ctx.draw_world();
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub world: World,
    pub camera: Camera2D,
    pub sprites: SpriteRegistry,
    events: Vec<GameEvent>,
    max_events: usize,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            world: World::new(),
            camera: Camera2D::new(config.world_width, config.world_height),
            sprites: SpriteRegistry::new(),
            events: Vec::new(),
            max_events: config.max_events,
        }
    }

    /// Emit a game event to be forwarded to the host.
    /// Events past `max_events` are dropped for the rest of the frame.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        }
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Clear per-frame transient data. Called by the runner at frame start.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

/// Read-only world access plus the instance buffer, passed to Game::render.
pub struct RenderContext<'a> {
    pub world: &'a World,
    pub camera: &'a Camera2D,
    pub buffer: &'a mut RenderBuffer,
}

impl RenderContext<'_> {
    /// Draw the map and every active, in-play entity that has a sprite.
    pub fn draw_world(&mut self) {
        render::build_world_instances(self.world, self.camera, self.buffer);
    }

    /// Draw the map only.
    pub fn draw_map(&mut self) {
        if let Some(map) = self.world.map() {
            self.buffer.extend(map.build_visible_instances(self.camera));
        }
    }

    /// Draw a single entity, if it has a sprite.
    pub fn draw_entity(&mut self, entity: &Entity) {
        render::push_entity(entity, self.buffer);
    }

    /// Draw a sprite at an arbitrary world position, e.g. a banner.
    pub fn draw_sprite(&mut self, sprite: &SpriteComponent, pos: Vec2) {
        render::push_sprite(sprite, pos, self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareGame;

    impl Game for BareGame {
        fn init(&mut self, _ctx: &mut EngineContext) {}
        fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}
    }

    #[test]
    fn events_past_the_capacity_are_dropped() {
        let config = GameConfig {
            max_events: 2,
            ..Default::default()
        };
        let mut ctx = EngineContext::new(&config);
        for kind in 0..5 {
            ctx.emit_event(GameEvent::new(kind as f32));
        }
        assert_eq!(ctx.events().len(), 2);

        ctx.clear_frame_data();
        assert!(ctx.events().is_empty());
    }

    #[test]
    fn default_render_draws_the_world() {
        let game = BareGame;
        let config = game.config();
        let mut ctx = EngineContext::new(&config);
        ctx.world
            .set_player(Entity::player().with_sprite(SpriteComponent::new(0.0, 0.0)));

        let mut buffer = RenderBuffer::new(config.max_instances);
        game.render(&mut RenderContext {
            world: &ctx.world,
            camera: &ctx.camera,
            buffer: &mut buffer,
        });
        assert_eq!(buffer.instance_count(), 1);
    }
}
