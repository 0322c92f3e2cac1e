//! Populates the entity store: road tiles, parked traffic, the player car.

use glam::Vec2;
use crate::api::game::SimulationState;
use crate::api::types::EntityId;
use crate::assets::registry::SpriteRegistry;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::components::motion::Motion;
use crate::drive::config::{DriveConfig, MAX_TRACK_ENTITIES};

pub const PLAYER_TAG: &str = "player";
pub const TRAFFIC_TAG: &str = "traffic";
pub const ROAD_TAG: &str = "road";

/// Sprite names the track expects in the manifest.
pub const PLAYER_SPRITE: &str = "player";
pub const ROAD_SPRITE: &str = "road";
/// Traffic sprites, cycled when there are more cars than names.
pub const TRAFFIC_SPRITES: [&str; 4] = ["car_2", "car_20", "car_9", "car_49"];

fn with_optional_sprite(entity: Entity, assets: &SpriteRegistry, name: &str) -> Entity {
    match assets.sprite(name) {
        Some(sprite) => entity.with_sprite(sprite),
        None => entity,
    }
}

/// Road tiles centered on screen, from y = 0 up to `road_length`.
pub fn spawn_road(sim: &mut SimulationState, config: &DriveConfig, assets: &SpriteRegistry) -> usize {
    let layout = &config.layout;
    let count = layout.road_tile_count().min(MAX_TRACK_ENTITIES);
    let size = Vec2::new(config.road_width, layout.road_tile_height);
    for i in 0..count {
        let id = sim.next_id();
        let tile = Entity::new(id)
            .with_tag(ROAD_TAG)
            .with_layer(RenderLayer::Road)
            .with_pos(Vec2::new(config.screen_width / 2.0, i as f32 * layout.road_tile_height))
            .with_size(size);
        sim.scene.spawn(with_optional_sprite(tile, assets, ROAD_SPRITE));
    }
    count
}

/// Parked cars down the center line. They never move.
pub fn spawn_traffic(sim: &mut SimulationState, config: &DriveConfig, assets: &SpriteRegistry) -> usize {
    let layout = &config.layout;
    let count = (layout.traffic_count as usize).min(MAX_TRACK_ENTITIES);
    for i in 0..count {
        let id = sim.next_id();
        let y = layout.traffic_first_y + i as f32 * layout.traffic_spacing;
        let car = Entity::new(id)
            .with_tag(TRAFFIC_TAG)
            .with_layer(RenderLayer::Traffic)
            .with_pos(Vec2::new(config.screen_width / 2.0, y))
            .with_size(Vec2::from(config.car_size));
        let sprite = TRAFFIC_SPRITES[i % TRAFFIC_SPRITES.len()];
        sim.scene.spawn(with_optional_sprite(car, assets, sprite));
    }
    count
}

/// The player car, at rest, carrying the corridor bounds.
pub fn spawn_player(sim: &mut SimulationState, config: &DriveConfig, assets: &SpriteRegistry) -> EntityId {
    let id = sim.next_id();
    let player = Entity::new(id)
        .with_tag(PLAYER_TAG)
        .with_layer(RenderLayer::Player)
        .with_pos(Vec2::from(config.player_start))
        .with_size(Vec2::from(config.car_size))
        .with_motion(Motion::default())
        .with_bounds(config.bounds());
    sim.scene.spawn(with_optional_sprite(player, assets, PLAYER_SPRITE));
    id
}
