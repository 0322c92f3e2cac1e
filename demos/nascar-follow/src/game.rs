use lane_engine::*;

const SCREEN_WIDTH: f32 = 1000.0;
const SCREEN_HEIGHT: f32 = 800.0;
const ROAD_WIDTH: f32 = 600.0;
const CAR_SIZE: [f32; 2] = [64.0, 100.0];
const PLAYER_SPEED: f32 = 400.0;
const LATERAL_SPEED: f32 = 250.0;
const VIEWPORT_ZOOM: f32 = 1.2;

/// Car on an open road. A zoomed-out camera follows it; only the kerbs
/// hold it in.
pub struct NascarFollow {
    drive: DriveGame,
}

impl NascarFollow {
    pub fn new() -> Self {
        Self {
            drive: DriveGame::new(config()).unwrap_or_else(|err| {
                log::error!("nascar-follow: {}, using the default track", err);
                DriveGame::follow()
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
        speeds: DriveSpeeds::new(PLAYER_SPEED, LATERAL_SPEED),
        view: ViewMode::Follow { zoom: VIEWPORT_ZOOM },
        ..DriveConfig::follow()
    }
}

impl Game for NascarFollow {
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
    use lane_engine::input::state::{KEY_DOWN, KEY_RIGHT};

    #[test]
    fn config_is_valid_and_open_ended() {
        let config = config();
        assert!(config.validate().is_ok());
        assert!(config.corridor().vertical.is_none());
        assert!(config.camera().is_tracking());
    }

    #[test]
    fn camera_keeps_player_centered_below_the_screen() {
        let mut game = NascarFollow::new();
        let mut sim = SimulationState::new(&game.config());
        game.init(&mut sim, &SpriteRegistry::new());

        let mut input = InputQueue::new();
        input.push(InputEvent::KeyDown { key_code: KEY_DOWN });
        input.push(InputEvent::KeyDown { key_code: KEY_RIGHT });
        game.update(&mut sim, &input, 2.0);

        let player = sim.scene.find_by_tag("player").unwrap();
        assert_eq!(player.pos.y, -750.0);
        assert_eq!(player.right(), 800.0);

        let view = sim.camera.view();
        assert!((view.center().y - player.pos.y).abs() < 1e-2);
        assert!((view.width() - VIEWPORT_ZOOM * SCREEN_WIDTH).abs() < 1e-2);
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
