//! Read-only views of the world for renderers and the simulator.

use super::obstacle::Obstacle;
use crate::core::geometry::Rect;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarView {
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    /// Tilt in degrees, clamped to [-30, 30].
    pub angle: f64,
    pub bounds: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f64,
    pub gap_top: f64,
    pub gap_bottom: f64,
    pub top: Rect,
    pub bottom: Rect,
    pub passed: bool,
}

impl From<&Obstacle> for ObstacleView {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            x: obstacle.x,
            gap_top: obstacle.gap_top(),
            gap_bottom: obstacle.gap_bottom(),
            top: obstacle.top_barrier(),
            bottom: obstacle.bottom_barrier(),
            passed: obstacle.passed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub avatar: AvatarView,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub high_score: u32,
    pub is_over: bool,
    pub tick_count: u64,
}
