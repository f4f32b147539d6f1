use glam::Vec2;
use ledge_engine::*;

// World layout constants
const WORLD_WIDTH: f32 = 10.0;
const WORLD_HEIGHT: f32 = 7.5;
const PLAYER_SPAWN: Vec2 = Vec2::new(-4.0, 3.0);
const GRAVITY_Y: f32 = -9.81;
const RUN_SPEED: f32 = 3.0;
const FLOOR_Y: f32 = -3.25;
const LEDGE_Y: f32 = -2.25;

// Browser keyCode values
const KEY_SPACE: u32 = 32;
const KEY_LEFT: u32 = 37;
const KEY_RIGHT: u32 = 39;

// Game event kinds (Rust → host)
const EVENT_MISSION_COMPLETE: f32 = 1.0;
const EVENT_MISSION_FAILED: f32 = 2.0;
const EVENT_ENEMY_DOWN: f32 = 3.0;

// Custom event kinds (host → Rust)
const CUSTOM_RESTART: u32 = 1;

// Atlas cells in the demo sheet (see assets/manifest.json)
const ATLAS_ROW_ACTORS: f32 = 0.0;
const ATLAS_COL_PLAYER: f32 = 0.0;
const ATLAS_COL_SPIDER: f32 = 1.0;
const ATLAS_COL_EVIL: f32 = 2.0;
const ATLAS_COL_DIRT: f32 = 3.0;
const ATLAS_COL_GRASS: f32 = 4.0;
const ATLAS_ROW_BANNERS: f32 = 1.0;
const ATLAS_COL_FAIL: f32 = 0.0;
const ATLAS_COL_COMPLETE: f32 = 1.0;

/// Mission outcome, recomputed from world state every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MissionState {
    Running,
    Complete,
    Failed,
}

/// Failed when the player is lost; complete when every enemy is defeated
/// or carries a top contact from being stomped this tick.
fn mission_state(world: &World) -> MissionState {
    if world.player().lost {
        return MissionState::Failed;
    }
    let all_down = world.enemies().iter().all(|e| e.lost || e.contacts.top);
    if all_down {
        MissionState::Complete
    } else {
        MissionState::Running
    }
}

pub struct RiseOfTheAi {
    keys: KeyboardState,
    mission: MissionState,
    enemies_down: u32,
}

impl RiseOfTheAi {
    pub fn new() -> Self {
        Self {
            keys: KeyboardState::new(),
            mission: MissionState::Running,
            enemies_down: 0,
        }
    }

    /// Rebuild the playfield: the player up in the air, three walkers on the
    /// right ledge line, a dirt floor with grass ledges at both ends.
    fn spawn_world(ctx: &mut EngineContext) {
        ctx.world = World::new();

        ctx.world.set_player(
            Entity::player()
                .with_pos(PLAYER_SPAWN)
                .with_accel(Vec2::new(0.0, GRAVITY_Y))
                .with_sprite(SpriteComponent::new(ATLAS_COL_PLAYER, ATLAS_ROW_ACTORS)),
        );

        for (i, col) in [ATLAS_COL_SPIDER, ATLAS_COL_EVIL, ATLAS_COL_SPIDER]
            .into_iter()
            .enumerate()
        {
            ctx.world.add_enemy(
                Entity::enemy(AiKind::Walker)
                    .with_pos(Vec2::new(1.0 + i as f32, LEDGE_Y))
                    .with_sprite(SpriteComponent::new(col, ATLAS_ROW_ACTORS)),
            );
        }

        for i in 0..11 {
            ctx.world.add_platform(
                Entity::platform()
                    .with_pos(Vec2::new(i as f32 - 5.0, FLOOR_Y))
                    .with_sprite(SpriteComponent::new(ATLAS_COL_DIRT, ATLAS_ROW_ACTORS)),
            );
        }
        for x in [-5.0, -4.0, 5.0] {
            ctx.world.add_platform(
                Entity::platform()
                    .with_pos(Vec2::new(x, LEDGE_Y))
                    .with_sprite(SpriteComponent::new(ATLAS_COL_GRASS, ATLAS_ROW_ACTORS)),
            );
        }
    }

    fn restart(&mut self, ctx: &mut EngineContext) {
        Self::spawn_world(ctx);
        self.mission = MissionState::Running;
        self.enemies_down = 0;
        log::info!("mission restarted");
    }
}

impl Game for RiseOfTheAi {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            max_instances: 64,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        Self::spawn_world(ctx);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // Discrete inputs: jump on the key press, not while held
        for event in input.iter() {
            match event {
                InputEvent::KeyDown { key_code } => {
                    if *key_code == KEY_SPACE {
                        ctx.world.player_mut().jump();
                    }
                }
                InputEvent::Custom { kind, .. } => {
                    if *kind == CUSTOM_RESTART {
                        self.restart(ctx);
                    }
                }
                _ => {}
            }
        }

        // Held arrows drive horizontal speed; left wins when both are down
        self.keys.apply(input);
        let player = ctx.world.player_mut();
        player.vel.x = 0.0;
        if self.keys.is_down(KEY_LEFT) {
            player.vel.x = -RUN_SPEED;
        } else if self.keys.is_down(KEY_RIGHT) {
            player.vel.x = RUN_SPEED;
        }

        // Mission bookkeeping from last tick's world state
        let down = ctx.world.enemies().iter().filter(|e| e.lost).count() as u32;
        if down > self.enemies_down {
            self.enemies_down = down;
            ctx.emit_event(GameEvent {
                kind: EVENT_ENEMY_DOWN,
                a: down as f32,
                b: 0.0,
                c: 0.0,
            });
        }

        let next = mission_state(&ctx.world);
        if next != self.mission {
            match next {
                MissionState::Complete => {
                    log::info!("mission complete");
                    ctx.emit_event(GameEvent::new(EVENT_MISSION_COMPLETE));
                }
                MissionState::Failed => {
                    log::info!("mission failed");
                    ctx.emit_event(GameEvent::new(EVENT_MISSION_FAILED));
                }
                MissionState::Running => {}
            }
            self.mission = next;
        }
    }

    /// On failure only the fail banner and the terrain render; otherwise the
    /// player, the enemies still standing and, once all are down, the win
    /// banner. Banners are unit quads at the world origin.
    fn render(&self, ctx: &mut RenderContext) {
        let world = ctx.world;

        if world.player().lost {
            ctx.draw_sprite(
                &SpriteComponent::new(ATLAS_COL_FAIL, ATLAS_ROW_BANNERS),
                Vec2::ZERO,
            );
        } else {
            ctx.draw_entity(world.player());
            let mut down = 0;
            for enemy in world.enemies() {
                if !enemy.lost && !enemy.contacts.top {
                    ctx.draw_entity(enemy);
                } else {
                    down += 1;
                }
            }
            if down == world.enemies().len() {
                ctx.draw_sprite(
                    &SpriteComponent::new(ATLAS_COL_COMPLETE, ATLAS_ROW_BANNERS),
                    Vec2::ZERO,
                );
            }
        }

        for platform in world.platforms() {
            ctx.draw_entity(platform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn setup() -> (RiseOfTheAi, EngineContext) {
        let mut game = RiseOfTheAi::new();
        let mut ctx = EngineContext::new(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    #[test]
    fn initial_world_matches_the_mission_layout() {
        let (_, ctx) = setup();
        assert_eq!(ctx.world.player().pos, PLAYER_SPAWN);
        assert_eq!(ctx.world.enemies().len(), 3);
        assert_eq!(ctx.world.platforms().len(), 14);
    }

    #[test]
    fn arrow_keys_drive_horizontal_speed() {
        let (mut game, mut ctx) = setup();
        let mut input = InputQueue::new();

        input.push(InputEvent::KeyDown { key_code: KEY_RIGHT });
        game.update(&mut ctx, &input);
        assert_eq!(ctx.world.player().vel.x, RUN_SPEED);

        // Both arrows held: left wins
        input.clear();
        input.push(InputEvent::KeyDown { key_code: KEY_LEFT });
        game.update(&mut ctx, &input);
        assert_eq!(ctx.world.player().vel.x, -RUN_SPEED);

        input.clear();
        input.push(InputEvent::KeyUp { key_code: KEY_LEFT });
        input.push(InputEvent::KeyUp { key_code: KEY_RIGHT });
        game.update(&mut ctx, &input);
        assert_eq!(ctx.world.player().vel.x, 0.0);
    }

    #[test]
    fn space_jumps_only_when_grounded() {
        let (mut game, mut ctx) = setup();
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: KEY_SPACE });

        game.update(&mut ctx, &input);
        assert_eq!(ctx.world.player().vel.y, 0.0, "airborne jump is ignored");

        ctx.world.player_mut().contacts.bottom = true;
        game.update(&mut ctx, &input);
        assert_eq!(ctx.world.player().vel.y, JUMP_SPEED);
    }

    #[test]
    fn running_into_a_walker_fails_the_mission() {
        let (mut game, mut ctx) = setup();
        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: KEY_RIGHT });

        let mut failed_at = None;
        for tick in 0..600 {
            game.update(&mut ctx, &input);
            input.clear();
            ctx.world.step(DT);
            if ctx.events().iter().any(|e| e.kind == EVENT_MISSION_FAILED) {
                failed_at = Some(tick);
                break;
            }
            ctx.clear_frame_data();
        }

        assert!(failed_at.is_some(), "the player never reached an enemy");
        assert!(ctx.world.player().lost);
    }

    #[test]
    fn stomping_the_last_walker_completes_the_mission() {
        let (mut game, mut ctx) = setup();
        for enemy in ctx.world.enemies_mut().iter_mut().take(2) {
            enemy.lost = true;
        }
        game.enemies_down = 2;
        // Drop the player straight onto the remaining walker.
        ctx.world.player_mut().pos = Vec2::new(3.0, 0.0);

        let input = InputQueue::new();
        let mut complete = false;
        let mut saw_enemy_down = false;
        for _ in 0..300 {
            game.update(&mut ctx, &input);
            ctx.world.step(DT);
            for event in ctx.events() {
                saw_enemy_down |= event.kind == EVENT_ENEMY_DOWN && event.a == 3.0;
                complete |= event.kind == EVENT_MISSION_COMPLETE;
            }
            if complete {
                break;
            }
            ctx.clear_frame_data();
        }

        assert!(complete, "stomp never registered");
        assert!(saw_enemy_down);
        assert!(!ctx.world.player().lost);
    }

    #[test]
    fn restart_event_rebuilds_the_world() {
        let (mut game, mut ctx) = setup();
        ctx.world.player_mut().lost = true;
        ctx.world.player_mut().pos = Vec2::new(2.0, -1.0);

        let mut input = InputQueue::new();
        input.push(InputEvent::Custom {
            kind: CUSTOM_RESTART,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        game.update(&mut ctx, &input);

        assert!(!ctx.world.player().lost);
        assert_eq!(ctx.world.player().pos, PLAYER_SPAWN);
        assert_eq!(game.mission, MissionState::Running);
    }

    #[test]
    fn failed_mission_renders_banner_and_terrain_only() {
        let (game, mut ctx) = setup();
        ctx.world.player_mut().lost = true;

        let mut buffer = RenderBuffer::new(64);
        game.render(&mut RenderContext {
            world: &ctx.world,
            camera: &ctx.camera,
            buffer: &mut buffer,
        });

        // One banner plus the 14 platforms; no player, no enemies.
        assert_eq!(buffer.instance_count(), 15);
        let banner = buffer.instances()[0];
        assert_eq!((banner.x, banner.y), (0.0, 0.0));
        assert_eq!(banner.atlas_row, ATLAS_ROW_BANNERS);
    }

    #[test]
    fn victory_renders_the_win_banner_over_the_player() {
        let (game, mut ctx) = setup();
        for enemy in ctx.world.enemies_mut() {
            enemy.lost = true;
        }

        let mut buffer = RenderBuffer::new(64);
        game.render(&mut RenderContext {
            world: &ctx.world,
            camera: &ctx.camera,
            buffer: &mut buffer,
        });

        // Player, win banner, 14 platforms.
        assert_eq!(buffer.instance_count(), 16);
    }
}
