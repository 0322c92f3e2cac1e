use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::motion::{BoundsPolicy, Motion};
use crate::components::sprite::SpriteComponent;

/// Fat Entity — a single struct with optional components.
/// Designed for simplicity over ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Center position in world space. Y grows upward.
    pub pos: Vec2,
    /// Full width and height in world units.
    pub size: Vec2,
    /// Draw order bucket.
    pub layer: RenderLayer,
    /// Sprite component (optional — entities without sprites are invisible).
    pub sprite: Option<SpriteComponent>,
    /// Velocity (optional — entities without motion never move).
    pub motion: Option<Motion>,
    /// Bounds clamp applied after integration.
    pub bounds: Option<BoundsPolicy>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            layer: RenderLayer::default(),
            sprite: None,
            motion: None,
            bounds: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = Some(motion);
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = Some(bounds);
        self
    }

    // -- Edges --

    pub fn half_size(&self) -> Vec2 {
        self.size * 0.5
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x * 0.5
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y * 0.5
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y * 0.5
    }

    /// Move the entity so its left edge sits at `x`.
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.size.x * 0.5;
    }

    /// Move the entity so its right edge sits at `x`.
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x * 0.5;
    }

    /// Move the entity so its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y + self.size.y * 0.5;
    }

    /// Move the entity so its top edge sits at `y`.
    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y - self.size.y * 0.5;
    }

    /// Current velocity, zero for static entities.
    pub fn velocity(&self) -> Vec2 {
        self.motion.map(|m| m.velocity).unwrap_or(Vec2::ZERO)
    }
}
