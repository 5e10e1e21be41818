//! A simple scripted player used for headless runs.

use crate::core::constants::{AVATAR_SIZE, SCREEN_HEIGHT};
use crate::game::{GameInput, Snapshot};

/// Clearance kept between the avatar's bottom edge and the bottom barrier.
const BOTTOM_CLEARANCE: f64 = 30.0;

/// Line the autopilot tries to stay above: just over the bottom of the next
/// gate's gap, or mid-screen when no gate is ahead.
pub fn target_line(snapshot: &Snapshot) -> f64 {
    let avatar_x = snapshot.avatar.x;
    snapshot
        .obstacles
        .iter()
        .find(|o| o.top.right() > avatar_x)
        .map(|o| o.gap_bottom - AVATAR_SIZE - BOTTOM_CLEARANCE)
        .unwrap_or(SCREEN_HEIGHT / 2.0)
}

/// Flap when the avatar has sunk below the target line and is not already rising.
pub fn decide(snapshot: &Snapshot) -> Option<GameInput> {
    if snapshot.is_over {
        return None;
    }
    let avatar = &snapshot.avatar;
    if avatar.y > target_line(snapshot) && avatar.velocity >= 0.0 {
        Some(GameInput::Impulse)
    } else {
        None
    }
}
