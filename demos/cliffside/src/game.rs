use glam::Vec2;
use ledge_engine::*;

use crate::levels::{Level, LEVELS, TILE_ATLAS_COLS};

const FIXED_DT: f32 = 1.0 / 60.0;
const GRAVITY_Y: f32 = -9.81;
const RUN_SPEED: f32 = 3.0;
const TILE_SIZE: f32 = 1.0;
const CAMERA_SMOOTHING: f32 = 0.85;
/// How far below the map bottom the player may fall before the level resets.
const FALL_MARGIN: f32 = 2.0;

// Browser keyCode values
const KEY_SPACE: u32 = 32;
const KEY_LEFT: u32 = 37;
const KEY_RIGHT: u32 = 39;

// Game event kinds (Rust to host); `a` carries the new level index
const EVENT_LEVEL_ADVANCED: f32 = 1.0;
const EVENT_GAME_WON: f32 = 2.0;
const EVENT_PLAYER_FELL: f32 = 3.0;

// Custom event kinds (host to Rust)
const CUSTOM_RESTART: u32 = 1;

// Atlas cells in the tileset (see assets/manifest.json); row 0 holds the
// level tiles referenced by id from the grids.
const ATLAS_ROW_ACTORS: f32 = 1.0;
const ATLAS_COL_PLAYER: f32 = 0.0;
const ATLAS_COL_BANNER: f32 = 1.0;

pub struct Cliffside {
    keys: KeyboardState,
    level: usize,
    won: bool,
}

impl Cliffside {
    pub fn new() -> Self {
        Self {
            keys: KeyboardState::new(),
            level: 0,
            won: false,
        }
    }

    /// Tear down the world and rebuild it for one level: map geometry from
    /// the grid, the player at the spawn, camera clamped to the map.
    fn load_level(ctx: &mut EngineContext, level: &Level) {
        let map = TileMap::from_level_data(
            level.width,
            level.height,
            level.data,
            TILE_SIZE,
            TILE_ATLAS_COLS,
        );
        let (min, max) = map.bounds();
        ctx.camera.set_bounds(min, max);
        ctx.camera.set_smoothing(CAMERA_SMOOTHING);
        ctx.camera.look_at(level.spawn);

        ctx.world = World::new();
        ctx.world.set_map(map);
        ctx.world.set_player(
            Entity::player()
                .with_pos(level.spawn)
                .with_accel(Vec2::new(0.0, GRAVITY_Y))
                .with_sprite(SpriteComponent::new(ATLAS_COL_PLAYER, ATLAS_ROW_ACTORS)),
        );
    }

    fn restart(&mut self, ctx: &mut EngineContext) {
        self.level = 0;
        self.won = false;
        Self::load_level(ctx, &LEVELS[0]);
        log::info!("back to level 1");
    }
}

impl Game for Cliffside {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 256,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        Self::load_level(ctx, &LEVELS[self.level]);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match event {
                InputEvent::KeyDown { key_code } if *key_code == KEY_SPACE => {
                    if !self.won {
                        ctx.world.player_mut().jump();
                    }
                }
                InputEvent::Custom { kind, .. } if *kind == CUSTOM_RESTART => {
                    self.restart(ctx);
                }
                _ => {}
            }
        }
        self.keys.apply(input);

        // After the win the world freezes; only a restart gets out.
        if self.won {
            return;
        }

        let player = ctx.world.player_mut();
        player.vel.x = 0.0;
        if self.keys.is_down(KEY_LEFT) {
            player.vel.x = -RUN_SPEED;
        } else if self.keys.is_down(KEY_RIGHT) {
            player.vel.x = RUN_SPEED;
        }

        let fell = ctx
            .world
            .map()
            .is_some_and(|map| ctx.world.player().pos.y < map.bounds().0.y - FALL_MARGIN);
        if fell {
            ctx.emit_event(GameEvent::new(EVENT_PLAYER_FELL));
            log::info!("fell off level {}", self.level + 1);
            Self::load_level(ctx, &LEVELS[self.level]);
        } else if ctx.world.player().pos.x > LEVELS[self.level].exit_x {
            self.level += 1;
            if self.level == LEVELS.len() {
                self.won = true;
                ctx.emit_event(GameEvent::new(EVENT_GAME_WON));
                log::info!("all levels cleared");
            } else {
                Self::load_level(ctx, &LEVELS[self.level]);
                ctx.emit_event(GameEvent {
                    kind: EVENT_LEVEL_ADVANCED,
                    a: self.level as f32,
                    b: 0.0,
                    c: 0.0,
                });
                log::info!("level {} start", self.level + 1);
            }
        }

        let target = ctx.world.player().pos;
        ctx.camera.follow(target, FIXED_DT);
    }

    /// The default world pass plus a win banner at the camera center once
    /// every level is cleared.
    fn render(&self, ctx: &mut RenderContext) {
        ctx.draw_world();
        if self.won {
            let center = ctx.camera.center;
            ctx.draw_sprite(
                &SpriteComponent::new(ATLAS_COL_BANNER, ATLAS_ROW_ACTORS),
                center,
            );
        }
    }
}
