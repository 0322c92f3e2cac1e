use crate::api::game::{Game, GameConfig, RenderContext, SimulationState};
use crate::api::types::{Color, EntityId};
use crate::assets::registry::SpriteRegistry;
use crate::drive::config::{ConfigError, DriveConfig};
use crate::drive::track;
use crate::input::queue::InputQueue;
use crate::systems::drive::apply_drive;
use crate::systems::motion;
use crate::systems::text::TextCommand;

const HUD_X: f32 = 50.0;
const HUD_Y: f32 = 50.0;
const HUD_SIZE: f32 = 32.0;

/// A car on a road. Both demos are this game with different configs.
pub struct DriveGame {
    config: DriveConfig,
    player: Option<EntityId>,
}

impl DriveGame {
    /// Build a game from `config`, refusing one that fails validation.
    pub fn new(config: DriveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, player: None })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(DriveConfig::from_json(json)?)
    }

    /// Fixed view, screen-locked car.
    pub fn bounded() -> Self {
        Self { config: DriveConfig::bounded(), player: None }
    }

    /// Zoomed camera following the car.
    pub fn follow() -> Self {
        Self { config: DriveConfig::follow(), player: None }
    }

    pub fn drive_config(&self) -> &DriveConfig {
        &self.config
    }

    /// Player entity, once `init` has run.
    pub fn player(&self) -> Option<EntityId> {
        self.player
    }
}

impl Game for DriveGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, sim: &mut SimulationState, assets: &SpriteRegistry) {
        sim.camera = self.config.camera();
        let tiles = track::spawn_road(sim, &self.config, assets);
        let cars = track::spawn_traffic(sim, &self.config, assets);
        let player = track::spawn_player(sim, &self.config, assets);
        if let Some(p) = sim.scene.get(player) {
            sim.camera.track(p.pos);
        }
        self.player = Some(player);

        log::info!(
            "DriveGame: {} road tiles, {} parked cars, view {:?}",
            tiles,
            cars,
            self.config.view
        );
    }

    fn update(&mut self, sim: &mut SimulationState, input: &InputQueue, dt: f32) {
        sim.input.apply_events(input);

        let Some(id) = self.player else {
            return;
        };
        if let Some(player) = sim.scene.get_mut(id) {
            apply_drive(player, &sim.input, &self.config.speeds);
        }

        motion::step(&mut sim.scene, dt);

        if let Some(player) = sim.scene.get(id) {
            sim.camera.track(player.pos);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.frame.clear_color = self.config.background;
        ctx.frame.push_text(
            TextCommand::new(self.config.hud_text.clone(), HUD_X, HUD_Y)
                .with_color(Color::WHITE)
                .with_size(HUD_SIZE),
        );
    }
}
