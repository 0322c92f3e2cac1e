//! Motion and bounds controller.
//!
//! Explicit Euler integration followed by an axis-aligned clamp against the
//! entity's corridor. The clamp is a projection: it only moves position and
//! leaves velocity alone, so a car pushed against the kerb slides to a stop.

use glam::Vec2;
use crate::components::entity::Entity;
use crate::components::motion::Corridor;
use crate::core::scene::Scene;

/// Advance `entity.pos` by `velocity * dt`.
pub fn integrate(entity: &mut Entity, velocity: Vec2, dt: f32) {
    entity.pos += velocity * dt;
}

/// Clamp the entity's edges into `corridor`, in place.
///
/// The left check runs first; the right check only fires when the left one
/// did not. The vertical band, when present, is handled the same way with
/// bottom before top.
pub fn clamp_to_corridor(entity: &mut Entity, corridor: &Corridor) {
    if entity.left() < corridor.left {
        entity.set_left(corridor.left);
    } else if entity.right() > corridor.right {
        entity.set_right(corridor.right);
    }

    if let Some(band) = corridor.vertical {
        if entity.bottom() < band.bottom {
            entity.set_bottom(band.bottom);
        } else if entity.top() > band.top {
            entity.set_top(band.top);
        }
    }
}

/// Apply the entity's own bounds policy, if it has one.
pub fn apply_bounds(entity: &mut Entity) {
    if let Some(policy) = entity.bounds {
        clamp_to_corridor(entity, &policy.corridor);
    }
}

/// One motion tick over the whole scene: every active entity with a velocity
/// is integrated, then clamped by its bounds policy.
pub fn step(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        if !entity.active {
            continue;
        }
        let Some(motion) = entity.motion else {
            continue;
        };
        integrate(entity, motion.velocity, dt);
        apply_bounds(entity);
    }
}
