use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::api::types::Color;
use crate::components::motion::{BoundsPolicy, Corridor};
use crate::renderer::camera::Camera2D;
use crate::systems::drive::DriveSpeeds;

/// How the world is viewed, and whether the player is held on screen.
///
/// Vertical clamping only makes sense with a fixed view; a following
/// camera lets the car drive up the road without limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewMode {
    Fixed { clamp_vertical: bool },
    Follow { zoom: f32 },
}

/// Where the static scenery goes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackLayout {
    /// Number of parked cars down the road's center line.
    pub traffic_count: u32,
    /// Y of the first parked car.
    pub traffic_first_y: f32,
    /// Y distance between parked cars.
    pub traffic_spacing: f32,
    /// Road tiles are placed at y = 0, h, 2h, … below this.
    pub road_length: f32,
    /// Height of one road tile.
    pub road_tile_height: f32,
}

impl TrackLayout {
    /// Tiles needed to cover `road_length`. Zero for a degenerate layout.
    pub fn road_tile_count(&self) -> usize {
        if !positive(self.road_tile_height) || !self.road_length.is_finite() || self.road_length <= 0.0 {
            return 0;
        }
        (self.road_length / self.road_tile_height).ceil() as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.road_tile_height) {
            return Err(ConfigError::InvalidLayout("road tile height must be positive and finite"));
        }
        if !self.road_length.is_finite() || self.road_length < 0.0 {
            return Err(ConfigError::InvalidLayout("road length must be finite and non-negative"));
        }
        if self.road_length / self.road_tile_height > MAX_TRACK_ENTITIES as f32 {
            return Err(ConfigError::InvalidLayout("too many road tiles"));
        }
        if self.traffic_count as usize > MAX_TRACK_ENTITIES {
            return Err(ConfigError::InvalidLayout("too many parked cars"));
        }
        if !self.traffic_first_y.is_finite() || !self.traffic_spacing.is_finite() {
            return Err(ConfigError::InvalidLayout("traffic placement must be finite"));
        }
        Ok(())
    }
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            traffic_count: 4,
            traffic_first_y: 100.0,
            traffic_spacing: 230.0,
            road_length: 2000.0,
            road_tile_height: 400.0,
        }
    }
}

/// Everything a driving demo is parameterized by. Fixed at start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Drivable road width, centered on screen.
    pub road_width: f32,
    /// Width and height of every car.
    pub car_size: [f32; 2],
    pub player_start: [f32; 2],
    pub speeds: DriveSpeeds,
    pub view: ViewMode,
    #[serde(default)]
    pub layout: TrackLayout,
    #[serde(default = "default_hud_text")]
    pub hud_text: String,
    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_hud_text() -> String {
    "0 mph".to_string()
}

fn default_background() -> Color {
    Color::GRAY
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse drive config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("screen size must be positive and finite, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("camera zoom must be positive and finite, got {0}")]
    InvalidZoom(f32),
    #[error("road width {road} is narrower than a car ({car})")]
    RoadTooNarrow { road: f32, car: f32 },
    #[error("car size must be positive and finite, got {0:?}")]
    InvalidCar([f32; 2]),
    #[error("player start must be finite, got {0:?}")]
    InvalidStart([f32; 2]),
    #[error("speeds must be finite, got vertical {vertical} lateral {lateral}")]
    InvalidSpeed { vertical: f32, lateral: f32 },
    #[error("track layout: {0}")]
    InvalidLayout(&'static str),
}

/// Upper bound on spawned road tiles and parked cars.
pub const MAX_TRACK_ENTITIES: usize = 4096;

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl DriveConfig {
    /// Fixed view, screen-locked car.
    pub fn bounded() -> Self {
        Self {
            screen_width: 1000.0,
            screen_height: 800.0,
            road_width: 600.0,
            car_size: [64.0, 100.0],
            player_start: [450.0, 50.0],
            speeds: DriveSpeeds::uniform(200.0),
            view: ViewMode::Fixed { clamp_vertical: true },
            layout: TrackLayout::default(),
            hud_text: default_hud_text(),
            background: default_background(),
        }
    }

    /// Zoomed camera following the car up an open road.
    pub fn follow() -> Self {
        Self {
            speeds: DriveSpeeds::new(400.0, 250.0),
            view: ViewMode::Follow { zoom: 1.2 },
            ..Self::bounded()
        }
    }

    /// Parse and validate.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DriveConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.screen_width) || !positive(self.screen_height) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if let ViewMode::Follow { zoom } = self.view {
            if !positive(zoom) {
                return Err(ConfigError::InvalidZoom(zoom));
            }
        }
        if !positive(self.car_size[0]) || !positive(self.car_size[1]) {
            return Err(ConfigError::InvalidCar(self.car_size));
        }
        if !self.road_width.is_finite() || self.road_width < self.car_size[0] {
            return Err(ConfigError::RoadTooNarrow {
                road: self.road_width,
                car: self.car_size[0],
            });
        }
        if !self.player_start.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::InvalidStart(self.player_start));
        }
        if !self.speeds.vertical.is_finite() || !self.speeds.lateral.is_finite() {
            return Err(ConfigError::InvalidSpeed {
                vertical: self.speeds.vertical,
                lateral: self.speeds.lateral,
            });
        }
        self.layout.validate()
    }

    /// The player's corridor, derived once from screen and road width.
    pub fn corridor(&self) -> Corridor {
        let corridor = Corridor::centered_road(self.screen_width, self.road_width);
        match self.view {
            ViewMode::Fixed { clamp_vertical: true } => corridor.with_screen_height(self.screen_height),
            _ => corridor,
        }
    }

    pub fn bounds(&self) -> BoundsPolicy {
        BoundsPolicy::new(self.corridor())
    }

    pub fn camera(&self) -> Camera2D {
        match self.view {
            ViewMode::Fixed { .. } => Camera2D::fixed(self.screen_width, self.screen_height),
            ViewMode::Follow { zoom } => Camera2D::follow(self.screen_width, self.screen_height, zoom),
        }
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self::bounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(DriveConfig::bounded().validate().is_ok());
        assert!(DriveConfig::follow().validate().is_ok());
    }

    #[test]
    fn bounded_preset_clamps_vertically() {
        let corridor = DriveConfig::bounded().corridor();
        assert_eq!(corridor.left, 200.0);
        assert_eq!(corridor.right, 800.0);
        assert!(corridor.vertical.is_some());
        assert!(!DriveConfig::bounded().camera().is_tracking());
    }

    #[test]
    fn follow_preset_is_lateral_only_and_tracks() {
        let config = DriveConfig::follow();
        assert!(config.corridor().vertical.is_none());
        let camera = config.camera();
        assert!(camera.is_tracking());
        assert_eq!(camera.zoom, 1.2);
    }

    #[test]
    fn rejects_non_positive_zoom() {
        let mut config = DriveConfig::follow();
        config.view = ViewMode::Follow { zoom: 0.0 };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidZoom(_))));
    }

    #[test]
    fn rejects_road_narrower_than_car() {
        let mut config = DriveConfig::bounded();
        config.road_width = 50.0;
        assert!(matches!(config.validate(), Err(ConfigError::RoadTooNarrow { .. })));
    }

    #[test]
    fn rejects_bad_screen() {
        let mut config = DriveConfig::bounded();
        config.screen_height = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScreen { .. })));
    }

    #[test]
    fn rejects_nan_speeds() {
        let mut config = DriveConfig::bounded();
        config.speeds = DriveSpeeds::new(f32::NAN, 200.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed { .. })));
    }

    #[test]
    fn rejects_degenerate_car() {
        let mut config = DriveConfig::bounded();
        config.car_size = [64.0, 0.0];
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCar(_))));
    }

    #[test]
    fn rejects_unbounded_road() {
        let mut config = DriveConfig::bounded();
        config.layout.road_length = 1e9;
        config.layout.road_tile_height = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLayout(_))));

        config.layout = TrackLayout { road_tile_height: 0.0, ..TrackLayout::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLayout(_))));

        config.layout = TrackLayout { traffic_count: u32::MAX, ..TrackLayout::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLayout(_))));
    }

    #[test]
    fn road_tile_count_rounds_up() {
        let layout = TrackLayout { road_length: 2001.0, ..TrackLayout::default() };
        assert_eq!(layout.road_tile_count(), 6);
        assert_eq!(TrackLayout::default().road_tile_count(), 5);
        let empty = TrackLayout { road_tile_height: f32::NAN, ..TrackLayout::default() };
        assert_eq!(empty.road_tile_count(), 0);
    }

    #[test]
    fn parses_json_with_defaults() {
        let json = r#"{
            "screen_width": 1000,
            "screen_height": 800,
            "road_width": 600,
            "car_size": [64, 100],
            "player_start": [450, 50],
            "speeds": { "vertical": 400, "lateral": 250 },
            "view": { "mode": "follow", "zoom": 1.2 }
        }"#;
        let config = DriveConfig::from_json(json).unwrap();
        assert_eq!(config, DriveConfig::follow());
    }

    #[test]
    fn json_errors_are_reported_as_parse() {
        assert!(matches!(DriveConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }
}
