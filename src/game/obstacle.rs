//! A single gate: a top and bottom barrier with a passable gap between.

use crate::core::constants::{GAP_HEIGHT, GAP_MARGIN, OBSTACLE_WIDTH, SCREEN_HEIGHT};
use crate::core::geometry::Rect;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Top of the gap. Fixed once chosen.
    gap_top: f64,
    /// Whether the avatar has already been credited for this gate.
    pub passed: bool,
}

impl Obstacle {
    /// New gate at `x` with the gap top drawn uniformly from
    /// `[GAP_MARGIN, SCREEN_HEIGHT - GAP_MARGIN]` (inclusive).
    pub fn new<R: Rng>(x: f64, rng: &mut R) -> Self {
        let max_top = SCREEN_HEIGHT as u32 - GAP_MARGIN;
        let gap_top = rng.gen_range(GAP_MARGIN..=max_top);
        Self::with_gap(x, gap_top as f64)
    }

    /// Gate with an explicit gap top.
    pub fn with_gap(x: f64, gap_top: f64) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    pub fn gap_top(&self) -> f64 {
        self.gap_top
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_top + GAP_HEIGHT
    }

    pub fn tick(&mut self, speed: f64) {
        self.x -= speed;
    }

    pub fn is_offscreen(&self) -> bool {
        self.x + OBSTACLE_WIDTH < 0.0
    }

    pub fn top_barrier(&self) -> Rect {
        Rect::new(self.x, 0.0, OBSTACLE_WIDTH, self.gap_top)
    }

    pub fn bottom_barrier(&self) -> Rect {
        Rect::new(self.x, self.gap_bottom(), OBSTACLE_WIDTH, SCREEN_HEIGHT)
    }

    pub fn collides_with(&self, bounds: &Rect) -> bool {
        self.top_barrier().intersects(bounds) || self.bottom_barrier().intersects(bounds)
    }

    /// True the first time the gate's left edge is behind `avatar_x`.
    ///
    /// Callers must follow a `true` with [`Obstacle::mark_passed`] so a gate
    /// scores at most once.
    pub fn has_been_passed_by(&self, avatar_x: f64) -> bool {
        !self.passed && self.x < avatar_x
    }

    pub fn mark_passed(&mut self) {
        self.passed = true;
    }
}
