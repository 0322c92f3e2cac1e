use lane_engine::*;

const SCREEN_WIDTH: f32 = 1000.0;
const SCREEN_HEIGHT: f32 = 800.0;
const ROAD_WIDTH: f32 = 600.0;
const CAR_SIZE: [f32; 2] = [64.0, 100.0];
const MOVEMENT_SPEED: f32 = 200.0;

/// Car on a road that fits the screen. The view never moves and the car
/// is held inside the road and the screen.
pub struct NascarBounds {
    drive: DriveGame,
}

impl NascarBounds {
    pub fn new() -> Self {
        Self {
            drive: DriveGame::new(config()).unwrap_or_else(|err| {
                log::error!("nascar-bounds: {}, using the default track", err);
                DriveGame::bounded()
            }),
        }
    }
}

fn config() -> DriveConfig {
    DriveConfig {
        screen_width: SCREEN_WIDTH,
        screen_height: SCREEN_HEIGHT,
        road_width: ROAD_WIDTH,
        car_size: CAR_SIZE,
        player_start: [450.0, 50.0],
        speeds: DriveSpeeds::uniform(MOVEMENT_SPEED),
        view: ViewMode::Fixed { clamp_vertical: true },
        ..DriveConfig::bounded()
    }
}

impl Game for NascarBounds {
    fn config(&self) -> GameConfig {
        self.drive.config()
    }

    fn init(&mut self, sim: &mut SimulationState, assets: &SpriteRegistry) {
        self.drive.init(sim, assets);
    }

    fn update(&mut self, sim: &mut SimulationState, input: &InputQueue, dt: f32) {
        self.drive.update(sim, input, dt);
    }

    fn render(&self, ctx: &mut RenderContext) {
        self.drive.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_valid_and_screen_locked() {
        let config = config();
        assert!(config.validate().is_ok());
        assert!(config.corridor().vertical.is_some());
        assert!(!config.camera().is_tracking());
    }

    #[test]
    fn car_cannot_leave_the_screen() {
        let mut game = NascarBounds::new();
        let mut sim = SimulationState::new(&game.config());
        game.init(&mut sim, &SpriteRegistry::new());

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: lane_engine::input::state::KEY_DOWN });
        input.push(InputEvent::KeyDown { key_code: lane_engine::input::state::KEY_LEFT });
        game.update(&mut sim, &input, 5.0);

        let player = sim.scene.find_by_tag("player").unwrap();
        assert_eq!(player.left(), 200.0);
        assert_eq!(player.bottom(), 0.0);
    }

    #[test]
    fn shipped_manifest_covers_track_sprites() {
        use lane_engine::drive::track::{PLAYER_SPRITE, ROAD_SPRITE, TRAFFIC_SPRITES};

        let manifest = AssetManifest::from_json(include_str!("../assets/manifest.json")).unwrap();
        let registry = SpriteRegistry::from_manifest(&manifest);
        for name in [PLAYER_SPRITE, ROAD_SPRITE].into_iter().chain(TRAFFIC_SPRITES) {
            assert!(registry.get(name).is_some(), "missing sprite {}", name);
        }
    }
}
