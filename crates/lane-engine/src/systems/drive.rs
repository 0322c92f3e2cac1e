use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::components::entity::Entity;
use crate::components::motion::Motion;
use crate::input::state::InputState;

/// Signed speed magnitudes applied while a direction is held, in world
/// units per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveSpeeds {
    /// Up/down magnitude.
    pub vertical: f32,
    /// Left/right magnitude.
    pub lateral: f32,
}

impl DriveSpeeds {
    pub fn new(vertical: f32, lateral: f32) -> Self {
        Self { vertical, lateral }
    }

    /// Same magnitude on both axes.
    pub fn uniform(speed: f32) -> Self {
        Self::new(speed, speed)
    }

    /// Velocity for the current held directions.
    pub fn velocity(&self, input: &InputState) -> Vec2 {
        Vec2::new(
            input.lateral.sign() * self.lateral,
            input.vertical.sign() * self.vertical,
        )
    }
}

/// Write the velocity implied by `input` into the entity's motion component,
/// adding one if the entity had none.
pub fn apply_drive(entity: &mut Entity, input: &InputState, speeds: &DriveSpeeds) {
    let velocity = speeds.velocity(input);
    match entity.motion.as_mut() {
        Some(motion) => motion.velocity = velocity,
        None => entity.motion = Some(Motion::new(velocity)),
    }
}
