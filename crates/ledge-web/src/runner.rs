use ledge_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, RenderBuffer,
    AssetManifest, SpriteRegistry,
    FixedTimestep, ProtocolLayout,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `rise-of-the-ai`) creates a `thread_local!`
/// GameRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::new(config.max_instances);
        let ctx = EngineContext::new(&config);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            timestep,
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Load the asset manifest and rebuild the sprite registry from it.
    /// A malformed manifest is logged and leaves the registry as it was
    /// rather than tearing down the WASM instance.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!(
                    "manifest loaded: {} atlases, {} sprites",
                    manifest.atlases.len(),
                    manifest.sprites.len()
                );
                self.ctx.sprites = SpriteRegistry::from_manifest(&manifest);
            }
            Err(err) => {
                log::error!("failed to parse asset manifest: {}", err);
            }
        }
    }

    /// Run one frame tick: update the game, step the world, rebuild instances.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            self.ctx.world.step(self.timestep.dt());
        }

        // Drain input after update
        self.input.clear();

        // Rebuild the instance buffer through the game's render pass
        self.render_buffer.clear();
        let mut render_ctx = RenderContext {
            world: &self.ctx.world,
            camera: &self.ctx.camera,
            buffer: &mut self.render_buffer,
        };
        self.game.render(&mut render_ctx);
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events().as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events().len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn camera_x(&self) -> f32 {
        self.ctx.camera.center.x
    }

    pub fn camera_y(&self) -> f32 {
        self.ctx.camera.center.y
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
