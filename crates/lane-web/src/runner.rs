use lane_engine::{
    Game, GameConfig, SimulationState, RenderContext,
    InputEvent, InputQueue, FrameSnapshot,
    AssetManifest, SpriteRegistry, ProtocolLayout,
};
use lane_engine::bridge::protocol::PackedFrameWriter;
use lane_engine::renderer::traits::present;
use lane_engine::systems::render::build_frame;
use lane_engine::systems::text::texts_to_json;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `nascar-bounds`) creates a `thread_local!`
/// GameRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
///
/// Per frame: queued input is folded by `Game::update` together with the
/// frame's `dt` (one update, no sub-stepping), the queue is drained, then a
/// snapshot is built and packed for the browser.
pub struct GameRunner<G: Game> {
    game: G,
    sim: SimulationState,
    input: InputQueue,
    assets: SpriteRegistry,
    frame: FrameSnapshot,
    writer: PackedFrameWriter,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        Self {
            sim: SimulationState::new(&config),
            input: InputQueue::new(),
            assets: SpriteRegistry::new(),
            frame: FrameSnapshot::with_capacity(config.screen_width, config.screen_height, config.max_instances),
            writer: PackedFrameWriter::new(layout, config.screen_width, config.screen_height),
            game,
            config,
            initialized: false,
        }
    }

    /// Register sprite images. Call before `init`; handles are fixed for the
    /// session once entities have been spawned.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let manifest = AssetManifest::from_json(json)?;
        self.assets = SpriteRegistry::from_manifest(&manifest);
        log::info!("loaded {} sprites", self.assets.len());
        Ok(())
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            log::warn!("init called twice, ignoring");
            return;
        }
        self.game.init(&mut self.sim, &self.assets);
        self.initialized = true;
        self.render_frame();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the simulation, then draw.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.game.update(&mut self.sim, &self.input, dt);
        self.input.drain();

        self.render_frame();
    }

    fn render_frame(&mut self) {
        build_frame(&self.sim.scene, &self.sim.camera, &mut self.frame, self.config.max_instances);
        {
            let mut render_ctx = RenderContext {
                frame: &mut self.frame,
            };
            self.game.render(&mut render_ctx);
        }
        self.frame.texts.truncate(self.config.max_texts);
        present(&self.frame, &mut self.writer);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn simulation(&self) -> &SimulationState {
        &self.sim
    }

    pub fn frame(&self) -> &FrameSnapshot {
        &self.frame
    }

    // ---- Pointer accessors for shared buffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.writer.buffer_ptr()
    }

    pub fn frame_floats(&self) -> &[f32] {
        self.writer.buffer()
    }

    pub fn instance_count(&self) -> u32 {
        self.writer.instance_count()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.writer.layout().buffer_total_floats as u32
    }

    pub fn max_instances(&self) -> u32 {
        self.writer.layout().max_instances as u32
    }

    /// HUD text for the current frame as JSON. Empty list on failure.
    pub fn hud_json(&self) -> String {
        texts_to_json(self.writer.texts()).unwrap_or_else(|err| {
            log::error!("failed to encode HUD text: {}", err);
            "[]".to_string()
        })
    }

    pub fn screen_width(&self) -> f32 {
        self.config.screen_width
    }

    pub fn screen_height(&self) -> f32 {
        self.config.screen_height
    }
}
