use glam::Vec2;

/// Velocity carried by entities that move under the motion system.
/// Only the player car has one; road tiles and traffic are static.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    /// World units per second.
    pub velocity: Vec2,
}

impl Motion {
    pub fn new(velocity: Vec2) -> Self {
        Self { velocity }
    }
}

/// Optional vertical band of a corridor, `bottom < top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalBand {
    pub bottom: f32,
    pub top: f32,
}

/// World-space region an entity may not leave.
///
/// Lateral bounds are always present. The vertical band is optional and is
/// disabled when the camera follows the player along the road.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corridor {
    pub left: f32,
    pub right: f32,
    pub vertical: Option<VerticalBand>,
}

impl Corridor {
    /// Lateral-only corridor.
    pub fn lateral(left: f32, right: f32) -> Self {
        Self { left, right, vertical: None }
    }

    /// Corridor of `road_width` centered on a screen of `screen_width`.
    pub fn centered_road(screen_width: f32, road_width: f32) -> Self {
        let margin = (screen_width - road_width) / 2.0;
        Self::lateral(margin, screen_width - margin)
    }

    /// Add a vertical band.
    pub fn with_vertical(mut self, bottom: f32, top: f32) -> Self {
        self.vertical = Some(VerticalBand { bottom, top });
        self
    }

    /// Vertical band covering a screen of `screen_height`, top edge one unit inside.
    pub fn with_screen_height(self, screen_height: f32) -> Self {
        self.with_vertical(0.0, screen_height - 1.0)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Bounds behavior attached to an entity; applied after integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsPolicy {
    pub corridor: Corridor,
}

impl BoundsPolicy {
    pub fn new(corridor: Corridor) -> Self {
        Self { corridor }
    }

    /// Whether the vertical band is enforced.
    pub fn clamps_vertical(&self) -> bool {
        self.corridor.vertical.is_some()
    }
}
