//! The player-controlled avatar: a box that falls and can be kicked upward.

use crate::core::constants::{
    AVATAR_SIZE, AVATAR_START_Y, AVATAR_X, GRAVITY, IMPULSE_VELOCITY, MAX_TILT_DEGREES,
    TILT_PER_VELOCITY,
};
use crate::core::geometry::Rect;

/// Avatar physics state. `x` never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    x: f64,
    /// Vertical position of the top edge (positive = downward).
    pub y: f64,
    /// Vertical velocity in units per tick (positive = downward).
    pub velocity: f64,
}

impl Avatar {
    pub fn new() -> Self {
        Self::at(AVATAR_START_Y)
    }

    /// Avatar at the fixed column with its top edge at `y`, at rest.
    pub fn at(y: f64) -> Self {
        Self {
            x: AVATAR_X,
            y,
            velocity: 0.0,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    /// Bounding box, always derived from the current `y`.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, AVATAR_SIZE, AVATAR_SIZE)
    }

    /// Set velocity to the impulse constant, discarding the current velocity.
    pub fn apply_impulse(&mut self) {
        self.velocity = IMPULSE_VELOCITY;
    }

    /// Advance one tick: accelerate, then move.
    pub fn tick(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Tilt in degrees for renderers. Rising tilts up (positive), falling tilts down.
    pub fn angle_hint(&self) -> f64 {
        (self.velocity * TILT_PER_VELOCITY).clamp(-MAX_TILT_DEGREES, MAX_TILT_DEGREES)
    }
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}
