//! Terminal rendering.

pub mod assets;
pub mod play_scene;

pub use assets::{AssetError, Backdrop, Sprite};
pub use play_scene::Renderer;
