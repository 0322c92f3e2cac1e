use crate::api::types::EntityId;
use crate::assets::registry::SpriteRegistry;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::input::state::InputState;
use crate::renderer::camera::Camera2D;
use crate::renderer::traits::FrameSnapshot;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Screen width in pixels; also the width of the identity view.
    pub screen_width: f32,
    /// Screen height in pixels.
    pub screen_height: f32,
    /// Maximum number of sprite instances per frame (default: 64).
    pub max_instances: usize,
    /// Maximum number of HUD text lines per frame (default: 8).
    pub max_texts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1000.0,
            screen_height: 800.0,
            max_instances: 64,
            max_texts: 8,
        }
    }
}

/// The core contract every game must fulfill.
///
/// The runner calls, once per frame and in this order: `update` with the
/// frame's input and delta time, then `render` on a fresh snapshot.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Spawn entities and set up the camera. Sprite handles are acquired here
    /// and held for the session.
    fn init(&mut self, sim: &mut SimulationState, assets: &SpriteRegistry);

    /// The game loop tick. `dt` is in seconds and is not validated.
    fn update(&mut self, sim: &mut SimulationState, input: &InputQueue, dt: f32);

    /// Optional read-only render pass for screen-space overlays.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Simulation state, owned by the update step.
pub struct SimulationState {
    pub scene: Scene,
    /// Held directions, folded from input events once per frame.
    pub input: InputState,
    /// Derived every frame from the tracked entity.
    pub camera: Camera2D,
    next_id: u32,
}

impl SimulationState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            input: InputState::new(),
            camera: Camera2D::fixed(config.screen_width, config.screen_height),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Draw-side context for a game's render pass. Sees only the snapshot
/// built from the simulation, never the simulation itself.
pub struct RenderContext<'a> {
    pub frame: &'a mut FrameSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut sim = SimulationState::default();
        let a = sim.next_id();
        let b = sim.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn new_state_has_identity_camera() {
        let config = GameConfig {
            screen_width: 640.0,
            screen_height: 480.0,
            ..GameConfig::default()
        };
        let sim = SimulationState::new(&config);
        assert!(sim.scene.is_empty());
        assert_eq!(sim.camera.view().to_array(), [0.0, 640.0, 0.0, 480.0]);
    }
}
