//! Per-axis driving state, folded from key events once per frame.
//!
//! Each axis is a three-state machine. A press moves the axis to the
//! pressed direction regardless of its current state, so overlapping
//! opposite keys resolve to whichever arrived last. A release only returns
//! the axis to idle when it matches the direction the axis is moving in.

use crate::input::queue::{InputEvent, InputQueue};

/// DOM key codes for the arrow keys.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
/// DOM key codes for WASD.
pub const KEY_W: u32 = 87;
pub const KEY_A: u32 = 65;
pub const KEY_S: u32 = 83;
pub const KEY_D: u32 = 68;

/// A logical driving direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a platform key code to a direction. Unmapped keys return `None`.
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_UP | KEY_W => Some(Direction::Up),
            KEY_DOWN | KEY_S => Some(Direction::Down),
            KEY_LEFT | KEY_A => Some(Direction::Left),
            KEY_RIGHT | KEY_D => Some(Direction::Right),
            _ => None,
        }
    }

    /// The axis this direction acts on.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Lateral,
        }
    }

    /// The state an axis takes when this direction is pressed.
    pub fn moving_state(self) -> AxisState {
        match self {
            Direction::Up | Direction::Right => AxisState::MovingPositive,
            Direction::Down | Direction::Left => AxisState::MovingNegative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Lateral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisState {
    #[default]
    Idle,
    MovingPositive,
    MovingNegative,
}

impl AxisState {
    /// -1, 0 or +1.
    pub fn sign(self) -> f32 {
        match self {
            AxisState::Idle => 0.0,
            AxisState::MovingPositive => 1.0,
            AxisState::MovingNegative => -1.0,
        }
    }
}

/// Held-direction state for both axes. Persists across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub vertical: AxisState,
    pub lateral: AxisState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::Vertical => &mut self.vertical,
            Axis::Lateral => &mut self.lateral,
        }
    }

    pub fn axis(&self, axis: Axis) -> AxisState {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Lateral => self.lateral,
        }
    }

    /// A direction key went down.
    pub fn press(&mut self, direction: Direction) {
        let next = direction.moving_state();
        let slot = self.axis_mut(direction.axis());
        if *slot != next {
            log::debug!("{:?} axis: {:?} -> {:?}", direction.axis(), slot, next);
        }
        *slot = next;
    }

    /// A direction key went up.
    pub fn release(&mut self, direction: Direction) {
        let slot = self.axis_mut(direction.axis());
        if *slot == direction.moving_state() {
            log::debug!("{:?} axis: {:?} -> Idle", direction.axis(), slot);
            *slot = AxisState::Idle;
        }
    }

    /// Apply a single raw event. Unmapped keys are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                if let Some(direction) = Direction::from_key_code(key_code) {
                    self.press(direction);
                }
            }
            InputEvent::KeyUp { key_code } => {
                if let Some(direction) = Direction::from_key_code(key_code) {
                    self.release(direction);
                }
            }
        }
    }

    /// Fold every queued event, in arrival order.
    pub fn apply_events(&mut self, queue: &InputQueue) {
        for event in queue.iter() {
            self.apply(event);
        }
    }
}
