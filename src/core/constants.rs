// Screen
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Avatar
pub const AVATAR_SIZE: f64 = 30.0;
/// Fixed horizontal column of the avatar (one third of the screen, integer division).
pub const AVATAR_X: f64 = 133.0;
pub const AVATAR_START_Y: f64 = 300.0;
/// Downward acceleration per tick.
pub const GRAVITY: f64 = 0.25;
/// Velocity set by an impulse (negative = upward). Overwrites, never adds.
pub const IMPULSE_VELOCITY: f64 = -7.0;

// Obstacles
pub const OBSTACLE_SPEED: f64 = 3.0;
pub const OBSTACLE_WIDTH: f64 = 50.0;
pub const GAP_HEIGHT: f64 = 200.0;
/// Closest the top of a gap may sit to the ceiling or floor.
pub const GAP_MARGIN: u32 = 150;
pub const SPAWN_INTERVAL_MS: u64 = 1500;

// Rendering hints
pub const MAX_TILT_DEGREES: f64 = 30.0;
pub const TILT_PER_VELOCITY: f64 = -3.0;

// Tick and timing
pub const TICKS_PER_SECOND: u64 = 60;
pub const TICK_INTERVAL_MS: u64 = 16; // ~60 FPS
/// Largest frame delta fed to the accumulator after a stall.
pub const MAX_FRAME_DELTA_MS: u64 = 100;

// Persistence
pub const HIGH_SCORE_FILE: &str = "high_score.txt";
pub const LOG_FILE: &str = "skyward.log";
pub const AVATAR_SPRITE_FILE: &str = "avatar.txt";
