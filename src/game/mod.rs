//! The simulated world: avatar physics, gates, scoring and the session state machine.

pub mod avatar;
pub mod field;
pub mod input;
pub mod obstacle;
pub mod snapshot;
pub mod state;

pub use avatar::Avatar;
pub use field::ObstacleField;
pub use input::{map_key, GameInput};
pub use obstacle::Obstacle;
pub use snapshot::{AvatarView, ObstacleView, Snapshot};
pub use state::{GameState, Phase, TickEvents};
