//! The active set of gates, oldest (leftmost) first.

use super::obstacle::Obstacle;
use crate::core::constants::SCREEN_WIDTH;
use crate::core::geometry::Rect;
use rand::Rng;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Append an already-built gate at the back of the field.
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Spawn a gate at the right edge if more than `interval_ms` has elapsed
    /// since `last_spawn_ms`. Returns whether a gate was added; the caller
    /// owns the spawn timer.
    pub fn try_spawn<R: Rng>(
        &mut self,
        now_ms: u64,
        last_spawn_ms: u64,
        interval_ms: u64,
        rng: &mut R,
    ) -> bool {
        if now_ms.saturating_sub(last_spawn_ms) <= interval_ms {
            return false;
        }
        let obstacle = Obstacle::new(SCREEN_WIDTH, rng);
        trace!(gap_top = obstacle.gap_top(), "spawned obstacle");
        self.obstacles.push(obstacle);
        true
    }

    /// Advance every gate, then drop the ones fully past the left edge.
    ///
    /// `retain` keeps order and visits each gate exactly once, so removing a
    /// gate never causes its neighbour to be skipped.
    pub fn tick_all(&mut self, speed: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.tick(speed);
        }
        self.obstacles.retain(|o| !o.is_offscreen());
    }

    /// Mark and count the gates the avatar passed this tick.
    pub fn check_scoring(&mut self, avatar_x: f64) -> u32 {
        let mut newly_passed = 0;
        for obstacle in &mut self.obstacles {
            if obstacle.has_been_passed_by(avatar_x) {
                obstacle.mark_passed();
                newly_passed += 1;
            }
        }
        newly_passed
    }

    pub fn check_collision(&self, bounds: &Rect) -> bool {
        self.obstacles.iter().any(|o| o.collides_with(bounds))
    }
}
