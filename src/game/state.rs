//! Session orchestration: one avatar, one obstacle field, score keeping.

use super::avatar::Avatar;
use super::field::ObstacleField;
use super::input::GameInput;
use super::snapshot::{AvatarView, ObstacleView, Snapshot};
use crate::core::constants::{AVATAR_SIZE, OBSTACLE_SPEED, SCREEN_HEIGHT, SPAWN_INTERVAL_MS};
use crate::storage::ScoreStore;
use rand::Rng;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Over,
}

/// What happened during one call to [`GameState::tick`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Gates passed this tick.
    pub scored: u32,
    /// A gate was spawned this tick.
    pub spawned: bool,
    /// The session ended this tick.
    pub game_over: bool,
    /// The session ended with a new best score (persisted).
    pub new_high_score: bool,
    /// A restart input started a new session.
    pub restarted: bool,
    /// The player asked to quit. The driver decides what to do.
    pub quit_requested: bool,
}

pub struct GameState<S: ScoreStore> {
    avatar: Avatar,
    field: ObstacleField,
    score: u32,
    high_score: u32,
    phase: Phase,
    last_spawn_ms: u64,
    tick_count: u64,
    store: S,
}

impl<S: ScoreStore> GameState<S> {
    /// Start the first session at `now_ms`.
    pub fn new(store: S, now_ms: u64) -> Self {
        let mut state = Self {
            avatar: Avatar::new(),
            field: ObstacleField::new(),
            score: 0,
            high_score: 0,
            phase: Phase::Running,
            last_spawn_ms: now_ms,
            tick_count: 0,
            store,
        };
        state.reset(now_ms);
        state
    }

    /// Begin a new session: fresh avatar, empty field, zero score, best
    /// score re-read from the store, spawn timer restarted at `now_ms`.
    ///
    /// The best score never drops within a process: a store that lost a
    /// save (or holds less) does not lower it.
    pub fn reset(&mut self, now_ms: u64) {
        self.avatar = Avatar::new();
        self.field.clear();
        self.score = 0;
        self.high_score = self.high_score.max(self.store.load().value());
        self.phase = Phase::Running;
        self.last_spawn_ms = now_ms;
        self.tick_count = 0;
        info!(high_score = self.high_score, "session started");
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }

    pub fn field(&self) -> &ObstacleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ObstacleField {
        &mut self.field
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply one input. Returns the events it caused.
    pub fn apply_input(&mut self, input: GameInput, now_ms: u64) -> TickEvents {
        let mut events = TickEvents::default();
        match (input, self.phase) {
            (GameInput::Impulse, Phase::Running) => self.avatar.apply_impulse(),
            (GameInput::Impulse, Phase::Over) => {}
            (GameInput::Restart, Phase::Over) => {
                self.reset(now_ms);
                events.restarted = true;
            }
            (GameInput::Restart, Phase::Running) => {}
            (GameInput::Quit, _) => events.quit_requested = true,
        }
        events
    }

    /// Advance the world by one tick. Frozen while over.
    pub fn step<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> TickEvents {
        let mut events = TickEvents::default();
        if self.phase == Phase::Over {
            return events;
        }
        self.tick_count += 1;

        self.avatar.tick();

        if self
            .field
            .try_spawn(now_ms, self.last_spawn_ms, SPAWN_INTERVAL_MS, rng)
        {
            self.last_spawn_ms = now_ms;
            events.spawned = true;
        }

        self.field.tick_all(OBSTACLE_SPEED);

        let passed = self.field.check_scoring(self.avatar.x());
        if passed > 0 {
            self.score += passed;
            events.scored = passed;
            debug!(score = self.score, "passed gate");
        }

        let hit = self.field.check_collision(&self.avatar.bounds());
        if hit || self.out_of_bounds() {
            events.game_over = true;
            events.new_high_score = self.finish();
        }
        events
    }

    /// Apply `inputs` in order, then advance one tick.
    pub fn tick<R: Rng>(&mut self, inputs: &[GameInput], now_ms: u64, rng: &mut R) -> TickEvents {
        let mut events = TickEvents::default();
        for &input in inputs {
            let effect = self.apply_input(input, now_ms);
            events.restarted |= effect.restarted;
            events.quit_requested |= effect.quit_requested;
        }
        let stepped = self.step(now_ms, rng);
        events.scored = stepped.scored;
        events.spawned = stepped.spawned;
        events.game_over = stepped.game_over;
        events.new_high_score = stepped.new_high_score;
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            avatar: AvatarView {
                x: self.avatar.x(),
                y: self.avatar.y,
                velocity: self.avatar.velocity,
                angle: self.avatar.angle_hint(),
                bounds: self.avatar.bounds(),
            },
            obstacles: self.field.obstacles().iter().map(ObstacleView::from).collect(),
            score: self.score,
            high_score: self.high_score,
            is_over: self.is_over(),
            tick_count: self.tick_count,
        }
    }

    fn out_of_bounds(&self) -> bool {
        self.avatar.y < 0.0 || self.avatar.y > SCREEN_HEIGHT - AVATAR_SIZE
    }

    /// Running -> Over. Returns whether a new best score was recorded.
    fn finish(&mut self) -> bool {
        self.phase = Phase::Over;
        let new_best = self.score > self.high_score;
        if new_best {
            self.high_score = self.score;
            self.store.save(self.high_score);
            info!(score = self.score, "new high score");
        }
        info!(
            score = self.score,
            high_score = self.high_score,
            ticks = self.tick_count,
            "game over"
        );
        new_best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{AVATAR_START_Y, AVATAR_X, GRAVITY, IMPULSE_VELOCITY};
    use crate::game::obstacle::Obstacle;
    use crate::storage::MemoryScoreStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_game(best: Option<u32>) -> GameState<MemoryScoreStore> {
        let store = match best {
            Some(b) => MemoryScoreStore::with_best(b),
            None => MemoryScoreStore::new(),
        };
        GameState::new(store, 0)
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(1)
    }

    #[test]
    fn test_new_game_defaults() {
        let game = new_game(Some(12));
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 12);
        assert!(game.field().is_empty());
        assert_eq!(game.avatar().y, AVATAR_START_Y);
        assert_eq!(game.tick_count(), 0);
    }

    #[test]
    fn test_missing_store_value_defaults_to_zero() {
        assert_eq!(new_game(None).high_score(), 0);
    }

    #[test]
    fn test_step_applies_gravity() {
        let mut game = new_game(None);
        let mut rng = rng();
        game.step(0, &mut rng);
        assert_eq!(game.avatar().velocity, GRAVITY);
        assert_eq!(game.avatar().y, AVATAR_START_Y + GRAVITY);
    }

    #[test]
    fn test_impulse_ignored_when_over() {
        let mut game = new_game(None);
        game.finish();
        game.avatar_mut().velocity = 2.0;
        game.apply_input(GameInput::Impulse, 0);
        assert_eq!(game.avatar().velocity, 2.0);
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut game = new_game(None);
        let mut rng = rng();
        game.step(0, &mut rng);
        let events = game.apply_input(GameInput::Restart, 0);
        assert!(!events.restarted);
        assert_eq!(game.tick_count(), 1);
    }

    #[test]
    fn test_quit_only_reports() {
        let mut game = new_game(None);
        let events = game.apply_input(GameInput::Quit, 0);
        assert!(events.quit_requested);
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_ceiling_ends_game() {
        let mut game = new_game(None);
        game.avatar_mut().y = 3.0;
        game.avatar_mut().apply_impulse();
        let events = game.step(0, &mut rng());
        assert!(events.game_over);
        assert!(game.is_over());
    }

    #[test]
    fn test_floor_ends_game() {
        let mut game = new_game(None);
        *game.avatar_mut() = Avatar::at(SCREEN_HEIGHT - AVATAR_SIZE);
        let events = game.step(0, &mut rng());
        assert!(events.game_over);
    }

    #[test]
    fn test_resting_exactly_on_floor_is_in_bounds() {
        let mut game = new_game(None);
        *game.avatar_mut() = Avatar::at(SCREEN_HEIGHT - AVATAR_SIZE - GRAVITY);
        let events = game.step(0, &mut rng());
        assert_eq!(game.avatar().y, SCREEN_HEIGHT - AVATAR_SIZE);
        assert!(!events.game_over);
    }

    #[test]
    fn test_over_is_frozen() {
        let mut game = new_game(None);
        game.field_mut().push(Obstacle::with_gap(300.0, 200.0));
        game.finish();
        let before = game.snapshot();
        let events = game.step(10_000, &mut rng());
        assert_eq!(events, TickEvents::default());
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_collision_ends_game_and_saves_once() {
        let mut game = new_game(Some(0));
        game.score = 3;
        // Top barrier covers the avatar
        game.field_mut().push(Obstacle::with_gap(AVATAR_X + 3.0, 450.0));
        let events = game.step(0, &mut rng());
        assert!(events.game_over);
        assert!(events.new_high_score);
        assert_eq!(game.high_score(), 3);
        assert_eq!(game.store().saves, vec![3]);

        game.step(0, &mut rng());
        assert_eq!(game.store().saves, vec![3]);
    }

    #[test]
    fn test_game_over_below_best_does_not_save() {
        let mut game = new_game(Some(10));
        game.score = 4;
        game.finish();
        assert_eq!(game.high_score(), 10);
        assert!(game.store().saves.is_empty());
    }

    #[test]
    fn test_equal_to_best_does_not_save() {
        let mut game = new_game(Some(4));
        game.score = 4;
        assert!(!game.finish());
        assert!(game.store().saves.is_empty());
    }

    #[test]
    fn test_spawn_timer_advances() {
        let mut game = new_game(None);
        let mut rng = rng();
        assert!(!game.step(1500, &mut rng).spawned);
        assert!(game.step(1501, &mut rng).spawned);
        assert_eq!(game.last_spawn_ms(), 1501);
        assert_eq!(game.field().len(), 1);
        // Spawned at the right edge and advanced once in the same tick
        assert_eq!(game.field().obstacles()[0].x, 397.0);
        assert!(!game.step(3001, &mut rng).spawned);
        assert!(game.step(3002, &mut rng).spawned);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut game = new_game(Some(2));
        game.field_mut().push(Obstacle::with_gap(300.0, 200.0));
        game.score = 5;
        game.finish();
        let events = game.apply_input(GameInput::Restart, 9000);
        assert!(events.restarted);
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.score(), 0);
        assert!(game.field().is_empty());
        assert_eq!(game.high_score(), 5);
        assert_eq!(game.last_spawn_ms(), 9000);
        assert_eq!(game.avatar(), &Avatar::new());
    }

    /// Store that forgets every write.
    struct LossyStore;

    impl ScoreStore for LossyStore {
        fn load(&self) -> crate::storage::LoadOutcome {
            crate::storage::LoadOutcome::Loaded(0)
        }

        fn save(&mut self, _best: u32) {}
    }

    #[test]
    fn test_failed_save_does_not_lower_best_on_restart() {
        let mut game = GameState::new(LossyStore, 0);
        game.score = 3;
        assert!(game.finish());
        assert_eq!(game.high_score(), 3);
        game.apply_input(GameInput::Restart, 0);
        assert_eq!(game.high_score(), 3);
    }

    #[test]
    fn test_tick_applies_inputs_before_physics() {
        let mut game = new_game(None);
        let events = game.tick(&[GameInput::Impulse], 0, &mut rng());
        assert!(!events.game_over);
        assert_eq!(game.avatar().velocity, IMPULSE_VELOCITY + GRAVITY);
    }

    #[test]
    fn test_tick_restart_then_runs() {
        let mut game = new_game(None);
        game.finish();
        let events = game.tick(&[GameInput::Restart], 100, &mut rng());
        assert!(events.restarted);
        assert_eq!(game.tick_count(), 1);
        assert_eq!(game.avatar().velocity, GRAVITY);
    }

    #[test]
    fn test_snapshot_bounds_match_moved_avatar() {
        let mut game = new_game(None);
        game.avatar_mut().y = 100.0;
        let snap = game.snapshot();
        assert_eq!(snap.avatar.y, 100.0);
        assert_eq!(snap.avatar.bounds.y, snap.avatar.y);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = new_game(Some(1));
        game.field_mut().push(Obstacle::with_gap(250.0, 180.0));
        game.avatar_mut().velocity = 5.0;
        let snap = game.snapshot();
        assert_eq!(snap.avatar.x, AVATAR_X);
        assert_eq!(snap.avatar.angle, -15.0);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].gap_top, 180.0);
        assert_eq!(snap.obstacles[0].gap_bottom, 380.0);
        assert_eq!(snap.high_score, 1);
        assert!(!snap.is_over);
    }
}
